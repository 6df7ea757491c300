use serde::{Deserialize, Serialize};

use crate::domain::AdviceResult;

/// Prefix applied to every failure surfaced to the UI.
pub const ADVICE_FAILURE_PREFIX: &str = "Failed to get weight loss advice: ";

/// Observable state rendered by the advice screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceState {
    pub advice: String,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Coarse phase of the current request cycle, derived from [`AdviceState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvicePhase {
    Idle,
    Loading,
    Loaded,
    Errored,
}

impl AdviceState {
    pub fn phase(&self) -> AdvicePhase {
        if self.is_loading {
            AdvicePhase::Loading
        } else if self.error.is_some() {
            AdvicePhase::Errored
        } else if !self.advice.is_empty() {
            AdvicePhase::Loaded
        } else {
            AdvicePhase::Idle
        }
    }

    pub(crate) fn begin_request(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub(crate) fn reject_unauthenticated(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }

    pub(crate) fn complete(&mut self, result: AdviceResult) {
        self.is_loading = false;
        match result {
            Ok(text) => self.advice = text,
            Err(reason) => self.error = Some(format!("{ADVICE_FAILURE_PREFIX}{reason}")),
        }
    }
}
