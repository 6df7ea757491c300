//! Pure domain logic shared by the client and the CLI.

mod plan_extractor;

pub use plan_extractor::*;
