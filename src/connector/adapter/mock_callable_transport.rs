use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::application::CallableTransport;
use crate::domain::{DomainError, PLAN_END_MARKER, PLAN_START_MARKER};

/// In-process stand-in for the plan-generation function.
///
/// Answers every call with a short plan addressed to the requesting user,
/// wrapped in the plan markers the real function uses. Useful for running the
/// CLI offline.
pub struct MockCallableTransport {
    calls: AtomicUsize,
}

impl MockCallableTransport {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn generate_plan(user_id: &str) -> String {
        format!(
            "Here is your plan.\n{PLAN_START_MARKER}\
             Plan for {user_id}:\n\
             1. Keep a daily calorie deficit of about 500 kcal.\n\
             2. Walk 8,000 steps a day.\n\
             3. Strength train twice a week.\n\
             4. Sleep at least 7 hours.\
             {PLAN_END_MARKER}\nStay consistent!"
        )
    }
}

impl Default for MockCallableTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CallableTransport for MockCallableTransport {
    async fn call(&self, function: &str, data: Value) -> Result<Value, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        debug!("MockCallableTransport: {function} called with {data}");

        let user_id = data
            .get("userId")
            .and_then(Value::as_str)
            .unwrap_or("anonymous");

        Ok(Value::String(Self::generate_plan(user_id)))
    }
}
