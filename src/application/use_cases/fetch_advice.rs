use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::application::CallableTransport;
use crate::domain::{extract_plan, AdviceRequest, AdviceResult, DomainError};

/// Name of the remote function that generates weight-loss plans.
pub const GENERATE_PLAN_FUNCTION: &str = "generateWeightLossPlan";

/// Fetches a user's weight-loss plan and strips it out of its wrapper tags.
///
/// One remote call per [`fetch_advice`](Self::fetch_advice); no retries. The
/// user id is passed through as-is, so callers must make sure one exists.
pub struct RemoteAdviceClient {
    transport: Arc<dyn CallableTransport>,
}

impl RemoteAdviceClient {
    pub fn new(transport: Arc<dyn CallableTransport>) -> Self {
        Self { transport }
    }

    pub async fn fetch_advice(&self, user_id: &str) -> AdviceResult {
        info!("Requesting weight loss plan");
        debug!("RemoteAdviceClient: user id {user_id}");

        let data = serde_json::to_value(AdviceRequest::new(user_id))
            .map_err(|e| DomainError::transport(format!("failed to encode request: {e}")))?;

        let payload = match self.transport.call(GENERATE_PLAN_FUNCTION, data).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!("RemoteAdviceClient: {GENERATE_PLAN_FUNCTION} failed: {e}");
                return Err(e);
            }
        };

        Self::plan_from_payload(payload)
    }

    fn plan_from_payload(payload: Value) -> AdviceResult {
        match payload {
            Value::String(raw) => {
                debug!("RemoteAdviceClient raw response: {raw}");
                Ok(extract_plan(&raw).to_string())
            }
            other => {
                warn!("RemoteAdviceClient: expected a string payload, got {other}");
                Err(DomainError::UnexpectedFormat)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    struct CannedTransport {
        response: Mutex<Option<Result<Value, DomainError>>>,
        calls: Mutex<Vec<(String, Value)>>,
    }

    impl CannedTransport {
        fn new(response: Result<Value, DomainError>) -> Self {
            Self {
                response: Mutex::new(Some(response)),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CallableTransport for CannedTransport {
        async fn call(&self, function: &str, data: Value) -> Result<Value, DomainError> {
            self.calls.lock().unwrap().push((function.to_string(), data));
            self.response
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Err(DomainError::transport("no canned response left")))
        }
    }

    #[tokio::test]
    async fn sends_user_id_to_plan_function() {
        let transport = Arc::new(CannedTransport::new(Ok(json!("plan"))));
        let client = RemoteAdviceClient::new(transport.clone());

        client.fetch_advice("user-7").await.unwrap();

        let calls = transport.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "generateWeightLossPlan");
        assert_eq!(calls[0].1, json!({ "userId": "user-7" }));
    }

    #[tokio::test]
    async fn extracts_tagged_plan() {
        let transport = Arc::new(CannedTransport::new(Ok(json!(
            "Sure!\n<weight_loss_plan>Plan A</weight_loss_plan>"
        ))));
        let client = RemoteAdviceClient::new(transport);

        assert_eq!(client.fetch_advice("u").await.unwrap(), "Plan A");
    }

    #[tokio::test]
    async fn untagged_string_is_passed_through() {
        let transport = Arc::new(CannedTransport::new(Ok(json!("Plain text with no tags"))));
        let client = RemoteAdviceClient::new(transport);

        assert_eq!(
            client.fetch_advice("u").await.unwrap(),
            "Plain text with no tags"
        );
    }

    #[tokio::test]
    async fn non_string_payloads_are_unexpected_format() {
        for payload in [json!(42), json!(null), json!({ "plan": "x" }), json!(["a"])] {
            let transport = Arc::new(CannedTransport::new(Ok(payload)));
            let client = RemoteAdviceClient::new(transport);

            let err = client.fetch_advice("u").await.unwrap_err();
            assert!(err.is_unexpected_format());
        }
    }

    #[tokio::test]
    async fn transport_errors_propagate_unchanged() {
        let transport = Arc::new(CannedTransport::new(Err(DomainError::transport("network down"))));
        let client = RemoteAdviceClient::new(transport);

        let err = client.fetch_advice("u").await.unwrap_err();
        assert_eq!(err.to_string(), "network down");
    }
}
