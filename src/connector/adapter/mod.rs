mod https_callable_transport;
mod mock_callable_transport;
mod serial_ui_executor;
mod user_provider;

pub use https_callable_transport::*;
pub use mock_callable_transport::*;
pub use serial_ui_executor::*;
pub use user_provider::*;
