use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::application::{UiExecutor, UiJob};

/// A [`UiExecutor`] backed by a single Tokio task.
///
/// Jobs are queued on an unbounded channel and run one after another in
/// dispatch order, which makes the task the only writer of whatever state the
/// jobs touch. The task ends once every handle has been dropped and the queue
/// is drained.
#[derive(Clone)]
pub struct SerialUiExecutor {
    tx: mpsc::UnboundedSender<UiJob>,
}

impl SerialUiExecutor {
    /// Start the executor task. Must be called from within a Tokio runtime.
    pub fn spawn() -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<UiJob>();

        tokio::spawn(async move {
            while let Some(job) = rx.recv().await {
                job();
            }
            debug!("SerialUiExecutor: all handles dropped, stopping");
        });

        Self { tx }
    }
}

impl UiExecutor for SerialUiExecutor {
    fn dispatch(&self, job: UiJob) {
        if self.tx.send(job).is_err() {
            warn!("SerialUiExecutor: task has stopped, dropping job");
        }
    }
}
