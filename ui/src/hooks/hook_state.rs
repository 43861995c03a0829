use std::future::Future;
use std::rc::Rc;

use payloads::{ClientError, RequestError, RequestState};
use yew::prelude::*;

/// Request state held by a hook. Updates go through the shared
/// [`RequestState`] transitions so hooks and native handles agree.
pub(crate) struct HookState<T>(pub RequestState<T>);

impl<T> Default for HookState<T> {
    fn default() -> Self {
        Self(RequestState::default())
    }
}

pub(crate) enum Transition<T> {
    Start,
    Settle(Result<T, RequestError>),
}

impl<T: Clone> Reducible for HookState<T> {
    type Action = Transition<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        match action {
            Transition::Start => state.start(),
            Transition::Settle(result) => state.settle(result),
        }
        Rc::new(Self(state))
    }
}

/// Run one request, dispatching the pending and settled transitions.
pub(crate) async fn drive<T, Fut>(
    dispatcher: UseReducerDispatcher<HookState<T>>,
    request: Fut,
) where
    T: Clone + 'static,
    Fut: Future<Output = Result<T, ClientError>>,
{
    dispatcher.dispatch(Transition::Start);
    let result = request.await.map_err(RequestError::from);
    if let Err(e) = &result {
        tracing::warn!(status = ?e.status, "request failed: {e}");
    }
    dispatcher.dispatch(Transition::Settle(result));
}
