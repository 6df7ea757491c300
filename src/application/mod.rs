//! # Application Layer
//!
//! Ports to external collaborators, the advice fetch use case, and the
//! view-model that publishes its outcome to the UI.

pub mod interfaces;
pub mod use_cases;
pub mod view_models;

pub use interfaces::*;
pub use use_cases::*;
pub use view_models::*;
