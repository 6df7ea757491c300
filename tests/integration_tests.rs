//! Integration tests for LeanAdvice.
//!
//! These drive the view-model end to end with a recording transport standing
//! in for the cloud function.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use leanadvice::{
    AdvicePhase, AdviceState, AdviceViewModel, CallableTransport, DomainError,
    MockCallableTransport, RemoteAdviceClient, SerialUiExecutor, StaticUserProvider,
};

/// Records every call and answers with a fixed response.
struct RecordingTransport {
    response: fn() -> Result<Value, DomainError>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl RecordingTransport {
    fn new(response: fn() -> Result<Value, DomainError>) -> Arc<Self> {
        Arc::new(Self {
            response,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CallableTransport for RecordingTransport {
    async fn call(&self, function: &str, data: Value) -> Result<Value, DomainError> {
        self.calls.lock().unwrap().push((function.to_string(), data));
        (self.response)()
    }
}

fn setup_view_model(
    transport: Arc<dyn CallableTransport>,
    users: StaticUserProvider,
) -> AdviceViewModel {
    AdviceViewModel::new(
        Arc::new(RemoteAdviceClient::new(transport)),
        Arc::new(users),
        Arc::new(SerialUiExecutor::spawn()),
    )
}

async fn settle(view_model: &AdviceViewModel) -> AdviceState {
    let mut updates = view_model.subscribe();
    let state = updates
        .wait_for(|state| !state.is_loading)
        .await
        .expect("view-model dropped")
        .clone();
    state
}

#[tokio::test]
async fn test_unauthenticated_user_makes_no_remote_call() {
    let transport = RecordingTransport::new(|| Ok(json!("unused")));
    let vm = setup_view_model(transport.clone(), StaticUserProvider::signed_out());

    vm.request_advice();

    let state = vm.state();
    assert!(!state.is_loading);
    assert_eq!(state.error.as_deref(), Some("User not authenticated"));
    assert_eq!(state.advice, "");
    assert!(transport.calls().is_empty(), "no remote call should be made");
}

#[tokio::test]
async fn test_numeric_payload_reports_unexpected_format() {
    let transport = RecordingTransport::new(|| Ok(json!(42)));
    let vm = setup_view_model(transport, StaticUserProvider::signed_in("user-1"));

    vm.request_advice();
    let state = settle(&vm).await;

    assert!(!state.is_loading);
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to get weight loss advice: unexpected response format")
    );
    assert_eq!(state.phase(), AdvicePhase::Errored);
}

#[tokio::test]
async fn test_transport_failure_is_surfaced_with_prefix() {
    let transport = RecordingTransport::new(|| Err(DomainError::transport("network down")));
    let vm = setup_view_model(transport, StaticUserProvider::signed_in("user-1"));

    vm.request_advice();
    let state = settle(&vm).await;

    assert!(!state.is_loading);
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to get weight loss advice: network down")
    );
}

#[tokio::test]
async fn test_tagged_plan_is_published() {
    let transport =
        RecordingTransport::new(|| Ok(json!("<weight_loss_plan>Plan A</weight_loss_plan>")));
    let vm = setup_view_model(transport.clone(), StaticUserProvider::signed_in("user-1"));

    vm.request_advice();
    assert!(vm.state().is_loading);
    let state = settle(&vm).await;

    assert_eq!(
        state,
        AdviceState {
            advice: "Plan A".to_string(),
            is_loading: false,
            error: None,
        }
    );

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "generateWeightLossPlan");
    assert_eq!(calls[0].1, json!({ "userId": "user-1" }));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_view_model_is_reusable_across_cycles() {
    let transport = Arc::new(MockCallableTransport::new());
    let vm = setup_view_model(transport.clone(), StaticUserProvider::signed_in("user-2"));

    for _ in 0..3 {
        vm.request_advice();
        let state = settle(&vm).await;
        assert_eq!(state.phase(), AdvicePhase::Loaded);
        assert!(state.advice.starts_with("Plan for user-2:"));
        assert!(!state.advice.contains("<weight_loss_plan>"));
    }

    assert_eq!(transport.call_count(), 3);
}
