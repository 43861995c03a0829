use std::future::Future;
use std::rc::Rc;

use payloads::{ClientError, RequestState};
use yew::prelude::*;

use super::hook_state::{HookState, drive};

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub state: RequestState<T>,
    pub refetch: Callback<()>,
}

impl<T> FetchHookReturn<T> {
    /// Returns true if this is the initial load (data not yet fetched,
    /// currently loading, and no error).
    pub fn is_initial_loading(&self) -> bool {
        self.state.is_initial_loading()
    }
}

/// Generic fetch hook composer.
///
/// Automatically fetches on mount and provides refetch capability.
/// The fetch function captures dependencies from the closure, and the
/// deps parameter is used only for dependency tracking in use_callback
/// and use_effect_with.
///
/// # Example
///
/// ```ignore
/// #[hook]
/// pub fn use_album_count() -> FetchHookReturn<usize> {
///     use_fetch((), || async move {
///         let albums = get_api_client().list_albums().await?;
///         Ok(albums.len())
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    let state = use_reducer(HookState::<T>::default);

    let refetch = {
        let dispatcher = state.dispatcher();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let dispatcher = dispatcher.clone();
            let fetch_fn = fetch_fn.clone();

            yew::platform::spawn_local(async move {
                drive(dispatcher, fetch_fn()).await;
            });
        })
    };

    // Auto-fetch on mount and when deps change
    {
        let refetch = refetch.clone();
        let is_loading = state.0.is_loading;

        use_effect_with(deps, move |_| {
            if !is_loading {
                refetch.emit(());
            }
        });
    }

    FetchHookReturn {
        state: state.0.clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
