use crate::application::CurrentUserProvider;

/// Environment variable holding the signed-in user's id.
pub const USER_ID_ENV: &str = "LEANADVICE_USER_ID";

/// A session fixed at construction time.
#[derive(Debug, Clone, Default)]
pub struct StaticUserProvider {
    user_id: Option<String>,
}

impl StaticUserProvider {
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    pub fn signed_out() -> Self {
        Self { user_id: None }
    }
}

impl CurrentUserProvider for StaticUserProvider {
    fn current_user_id(&self) -> Option<String> {
        self.user_id.clone()
    }
}

/// Reads [`USER_ID_ENV`] on every call, so a session can change between requests.
#[derive(Debug, Clone, Default)]
pub struct EnvUserProvider;

impl CurrentUserProvider for EnvUserProvider {
    fn current_user_id(&self) -> Option<String> {
        std::env::var(USER_ID_ENV).ok().filter(|id| !id.is_empty())
    }
}
