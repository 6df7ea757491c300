use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("User not authenticated")]
    Unauthenticated,

    /// Remote call failed; carries the transport's own description.
    #[error("{0}")]
    Transport(String),

    #[error("unexpected response format")]
    UnexpectedFormat,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DomainError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_unexpected_format(&self) -> bool {
        matches!(self, Self::UnexpectedFormat)
    }
}
