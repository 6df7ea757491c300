mod callable_transport;
mod current_user_provider;
mod ui_executor;

pub use callable_transport::*;
pub use current_user_provider::*;
pub use ui_executor::*;
