pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    AdviceViewModel, CallableTransport, CurrentUserProvider, RemoteAdviceClient, UiExecutor,
    UiJob, GENERATE_PLAN_FUNCTION,
};

pub use connector::{
    EnvUserProvider, FunctionsConfig, HttpsCallableTransport, MockCallableTransport,
    SerialUiExecutor, StaticUserProvider, DEFAULT_REGION, USER_ID_ENV,
};

pub use domain::{
    extract_plan, AdvicePhase, AdviceRequest, AdviceResult, AdviceState, DomainError,
    ADVICE_FAILURE_PREFIX, PLAN_END_MARKER, PLAN_START_MARKER,
};
