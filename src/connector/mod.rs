//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Callable-function transports (HTTPS, in-process mock)
//! - Current-user providers backed by configuration
//! - The serial UI executor
//! - Endpoint configuration

pub mod adapter;
pub mod config;

pub use adapter::*;
pub use config::*;
