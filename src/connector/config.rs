use std::time::Duration;

use crate::domain::DomainError;

/// Region the plan-generation function is deployed to.
pub const DEFAULT_REGION: &str = "us-west1";

/// Where and how to reach callable cloud functions.
///
/// The endpoint for a function is `https://{region}-{project_id}.cloudfunctions.net/{name}`
/// unless `base_url` overrides it (local emulator, tests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionsConfig {
    region: String,
    project_id: Option<String>,
    base_url: Option<String>,
    id_token: Option<String>,
    timeout: Option<Duration>,
}

impl Default for FunctionsConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            project_id: None,
            base_url: None,
            id_token: None,
            timeout: None,
        }
    }
}

impl FunctionsConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            ..Self::default()
        }
    }

    /// Read configuration from the environment:
    ///
    /// | Variable                   | Purpose                                   |
    /// |----------------------------|-------------------------------------------|
    /// | `LEANADVICE_PROJECT_ID`    | Cloud project hosting the function        |
    /// | `LEANADVICE_FUNCTIONS_URL` | Base URL override (emulator)              |
    /// | `LEANADVICE_ID_TOKEN`      | Bearer token forwarded to the function    |
    /// | `LEANADVICE_TIMEOUT_SECS`  | Request timeout; transport default if unset |
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            region: DEFAULT_REGION.to_string(),
            project_id: var("LEANADVICE_PROJECT_ID"),
            base_url: var("LEANADVICE_FUNCTIONS_URL"),
            id_token: var("LEANADVICE_ID_TOKEN"),
            timeout: var("LEANADVICE_TIMEOUT_SECS")
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs),
        }
    }

    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_id_token(mut self, id_token: impl Into<String>) -> Self {
        self.id_token = Some(id_token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    pub fn id_token(&self) -> Option<&str> {
        self.id_token.as_deref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Base URL functions are served from, without a trailing slash.
    pub fn functions_base_url(&self) -> Result<String, DomainError> {
        if let Some(base) = &self.base_url {
            return Ok(base.trim_end_matches('/').to_string());
        }
        let project = self.project_id.as_deref().ok_or_else(|| {
            DomainError::configuration(
                "no project id configured (set LEANADVICE_PROJECT_ID or --project)",
            )
        })?;
        Ok(format!("https://{}-{}.cloudfunctions.net", self.region, project))
    }

    pub fn endpoint_url(&self, function: &str) -> Result<String, DomainError> {
        Ok(format!("{}/{}", self.functions_base_url()?, function))
    }
}
