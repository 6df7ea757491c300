use async_trait::async_trait;
use serde_json::Value;

use crate::domain::DomainError;

/// Invokes a named remote function and returns its JSON payload.
///
/// Implementors own the wire protocol, authentication headers and region
/// routing. Failures of any kind (network, HTTP status, a function-level error
/// object) are reported as [`DomainError::Transport`] carrying a human-readable
/// description, so callers can surface the message without inspecting it.
#[async_trait]
pub trait CallableTransport: Send + Sync {
    async fn call(&self, function: &str, data: Value) -> Result<Value, DomainError>;
}
