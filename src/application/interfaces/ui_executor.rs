/// A unit of work that mutates UI-observable state.
pub type UiJob = Box<dyn FnOnce() + Send + 'static>;

/// The serial context that owns UI-observable state.
///
/// Jobs dispatched here run one at a time, in dispatch order. Completions that
/// arrive on transport worker tasks must go through this before writing state.
///
/// An implementation that can no longer run jobs drops them. A dropped
/// completion job never clears `is_loading`, so the view-model stays in the
/// loading state until the next request.
pub trait UiExecutor: Send + Sync {
    fn dispatch(&self, job: UiJob);
}
