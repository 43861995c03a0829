use payloads::Album;
use yew::prelude::*;

use crate::{get_api_client, hooks::use_fetch};

use super::FetchHookReturn;

/// Hook to fetch every album. Loads once on mount; call `refetch` after a
/// mutation to pick up the change.
#[hook]
pub fn use_all_albums() -> FetchHookReturn<Vec<Album>> {
    use_fetch((), || async move {
        let result = get_api_client().list_albums().await;
        if let Ok(albums) = &result {
            tracing::debug!(count = albums.len(), "fetched albums");
        }
        result
    })
}
