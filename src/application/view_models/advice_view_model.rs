use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::application::{CurrentUserProvider, RemoteAdviceClient, UiExecutor};
use crate::domain::{AdviceState, DomainError};

/// Drives the advice screen: one fetch per [`request_advice`](Self::request_advice),
/// with the outcome published as an [`AdviceState`].
///
/// State writes that follow a remote call are dispatched through the
/// [`UiExecutor`], so observers only ever see changes made on the UI context.
/// Each request bumps a generation counter; a completion belonging to an older
/// request is discarded, so the most recently issued request decides the final
/// state.
pub struct AdviceViewModel {
    client: Arc<RemoteAdviceClient>,
    users: Arc<dyn CurrentUserProvider>,
    executor: Arc<dyn UiExecutor>,
    state: Arc<watch::Sender<AdviceState>>,
    generation: Arc<AtomicU64>,
}

impl AdviceViewModel {
    pub fn new(
        client: Arc<RemoteAdviceClient>,
        users: Arc<dyn CurrentUserProvider>,
        executor: Arc<dyn UiExecutor>,
    ) -> Self {
        let (state, _) = watch::channel(AdviceState::default());
        Self {
            client,
            users,
            executor,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AdviceState {
        self.state.borrow().clone()
    }

    /// Observe every state change.
    pub fn subscribe(&self) -> watch::Receiver<AdviceState> {
        self.state.subscribe()
    }

    /// Start a fetch for the signed-in user.
    ///
    /// Must be called from within a Tokio runtime; the remote call runs on a
    /// spawned task.
    pub fn request_advice(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let user_id = match self.users.current_user_id() {
            Some(id) if !id.is_empty() => id,
            _ => {
                warn!("Advice requested without an authenticated user");
                let message = DomainError::Unauthenticated.to_string();
                self.state
                    .send_modify(|state| state.reject_unauthenticated(message));
                return;
            }
        };

        self.state.send_modify(AdviceState::begin_request);

        let client = Arc::clone(&self.client);
        let executor = Arc::clone(&self.executor);
        let state = Arc::clone(&self.state);
        let current = Arc::clone(&self.generation);

        tokio::spawn(async move {
            let result = client.fetch_advice(&user_id).await;

            executor.dispatch(Box::new(move || {
                if current.load(Ordering::SeqCst) != generation {
                    debug!("Dropping stale advice completion (request #{generation})");
                    return;
                }
                match &result {
                    Ok(_) => info!("Weight loss plan received (request #{generation})"),
                    Err(e) => warn!("Weight loss plan request #{generation} failed: {e}"),
                }
                state.send_modify(|state| state.complete(result));
            }));
        });
    }
}
