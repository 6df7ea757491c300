//! # Domain Layer
//!
//! Advice models, the error taxonomy, and plan extraction.
//! This layer is independent of transports and UI frameworks.

mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
