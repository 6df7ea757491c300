mod advice;
mod advice_state;

pub use advice::*;
pub use advice_state::*;
