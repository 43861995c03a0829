use std::future::Future;
use std::rc::Rc;

use payloads::{ClientError, RequestState};
use yew::prelude::*;

use super::hook_state::{HookState, drive};

/// Return type for hooks that run a request on demand.
pub struct MutationHookReturn<A, T> {
    /// Start a request with the given arguments. Emitting again while a
    /// request is pending starts a second request; whichever response
    /// arrives last is what the state shows.
    pub run: Callback<A>,
    pub state: RequestState<T>,
}

/// Generic hook for requests triggered by the user rather than on mount.
///
/// Loading starts when `run` is emitted and clears the previous error. A
/// failure is logged and kept in `state.error`; it never reaches the
/// caller. Data from an earlier success stays in place after a failure.
#[hook]
pub fn use_mutation<A, T, F, Fut>(request_fn: F) -> MutationHookReturn<A, T>
where
    A: 'static,
    T: Clone + 'static,
    F: Fn(A) -> Fut + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    let state = use_reducer(HookState::<T>::default);

    let run = {
        let dispatcher = state.dispatcher();
        let request_fn = Rc::new(request_fn);

        use_callback((), move |args: A, _| {
            let dispatcher = dispatcher.clone();
            let request_fn = request_fn.clone();

            yew::platform::spawn_local(async move {
                drive(dispatcher, request_fn(args)).await;
            });
        })
    };

    MutationHookReturn {
        run,
        state: state.0.clone(),
    }
}
