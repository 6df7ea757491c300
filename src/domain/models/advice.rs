use serde::Serialize;

use crate::domain::DomainError;

/// Outcome of one advice fetch: the extracted plan text, or the reason it failed.
pub type AdviceResult = Result<String, DomainError>;

/// Payload sent to the plan-generation function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceRequest {
    user_id: String,
}

impl AdviceRequest {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_user_id_in_camel_case() {
        let request = AdviceRequest::new("uid-42");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({ "userId": "uid-42" }));
    }
}
