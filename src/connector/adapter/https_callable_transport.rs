use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::CallableTransport;
use crate::connector::FunctionsConfig;
use crate::domain::DomainError;

/// Callable-function request envelope.
#[derive(Serialize)]
struct CallableRequest<'a> {
    data: &'a Value,
}

/// Callable-function response envelope: `result` on success, `error` on failure.
#[derive(Deserialize)]
struct CallableResponse {
    #[serde(alias = "data")]
    result: Option<Value>,
    error: Option<CallableErrorBody>,
}

#[derive(Deserialize)]
struct CallableErrorBody {
    message: String,
    status: Option<String>,
}

/// HTTP client for HTTPS callable cloud functions.
///
/// Implements [`CallableTransport`] so the advice client stays decoupled from
/// the wire envelope and from reqwest.
///
/// The function's arguments are posted as `{"data": ...}`; its return value is
/// read from `{"result": ...}`. An `{"error": {"message": ...}}` body is
/// reported with the server's message, whatever the HTTP status. When
/// [`FunctionsConfig::id_token`] is set it is sent as a bearer token.
///
/// No timeout is applied unless the configuration asks for one.
pub struct HttpsCallableTransport {
    client: reqwest::Client,
    config: FunctionsConfig,
}

impl HttpsCallableTransport {
    pub fn new(config: FunctionsConfig) -> Result<Self, DomainError> {
        // Fail fast on a config that can never produce an endpoint.
        config.functions_base_url()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            DomainError::configuration(format!("HttpsCallableTransport: failed to build client: {e}"))
        })?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl CallableTransport for HttpsCallableTransport {
    async fn call(&self, function: &str, data: Value) -> Result<Value, DomainError> {
        let url = self.config.endpoint_url(function)?;
        debug!("HttpsCallableTransport: POST {url}");

        let mut request = self.client.post(&url).json(&CallableRequest { data: &data });
        if let Some(token) = self.config.id_token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            warn!("HttpsCallableTransport: request to {url} failed: {e}");
            DomainError::transport(e.to_string())
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            DomainError::transport(format!("failed to read response: {e}"))
        })?;

        let parsed = serde_json::from_str::<CallableResponse>(&body);

        if let Ok(CallableResponse {
            error: Some(error), ..
        }) = &parsed
        {
            warn!(
                "HttpsCallableTransport: {function} returned error {}: {}",
                error.status.as_deref().unwrap_or("UNKNOWN"),
                error.message
            );
            return Err(DomainError::transport(error.message.clone()));
        }

        if !status.is_success() {
            warn!("HttpsCallableTransport: {function} returned {status}: {body}");
            return Err(DomainError::transport(format!("HTTP {status}")));
        }

        let response = parsed.map_err(|e| {
            DomainError::transport(format!("failed to parse response: {e}"))
        })?;

        Ok(response.result.unwrap_or(Value::Null))
    }
}
