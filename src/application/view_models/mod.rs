mod advice_view_model;

pub use advice_view_model::*;
