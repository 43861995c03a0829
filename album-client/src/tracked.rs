use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use payloads::{ClientError, RequestError, RequestState};
use tokio::sync::watch;

/// Observable request state owned by one operation handle.
///
/// Clones share the same state. Transitions are applied with
/// `send_modify`, so no lock is held across the request itself and
/// overlapping runs settle in the order their responses arrive.
#[derive(Debug)]
pub struct Tracked<T> {
    state: Arc<watch::Sender<RequestState<T>>>,
}

impl<T> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<T> Default for Tracked<T> {
    fn default() -> Self {
        let (state, _) = watch::channel(RequestState::default());
        Self {
            state: Arc::new(state),
        }
    }
}

impl<T: Clone> Tracked<T> {
    /// Snapshot of the current state.
    pub fn state(&self) -> RequestState<T> {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every transition.
    pub fn subscribe(&self) -> watch::Receiver<RequestState<T>> {
        self.state.subscribe()
    }

    pub(crate) fn begin(&self) {
        self.state.send_modify(RequestState::start);
    }

    /// Drive one request through the pending and settled states.
    ///
    /// Failures are recorded in the state rather than returned. A request
    /// that panics settles with an unknown error instead of staying
    /// pending forever.
    pub async fn run<F>(&self, request: F) -> Option<T>
    where
        F: Future<Output = Result<T, ClientError>>,
    {
        self.begin();

        let result = match AssertUnwindSafe(request).catch_unwind().await {
            Ok(result) => result.map_err(RequestError::from),
            Err(_) => Err(RequestError::unknown()),
        };

        let data = match &result {
            Ok(data) => {
                tracing::debug!("request succeeded");
                Some(data.clone())
            }
            Err(e) => {
                tracing::warn!(status = ?e.status, "request failed: {e}");
                None
            }
        };
        self.state.send_modify(|state| state.settle(result));
        data
    }
}
