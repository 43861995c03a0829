use payloads::{Album, AlbumName};
use yew::prelude::*;

use crate::get_api_client;

use super::{MutationHookReturn, use_mutation};

/// Hook to load a single album by name, on demand.
#[hook]
pub fn use_view_album() -> MutationHookReturn<AlbumName, Album> {
    use_mutation(|album_name: AlbumName| async move {
        get_api_client().view_album(&album_name).await
    })
}
