mod fetch_advice;

pub use fetch_advice::*;
