use payloads::{AlbumName, responses::Confirmation};
use yew::prelude::*;

use crate::get_api_client;

use super::{MutationHookReturn, use_mutation};

#[hook]
pub fn use_delete_album() -> MutationHookReturn<AlbumName, Confirmation> {
    use_mutation(|album_name: AlbumName| async move {
        let result = get_api_client().delete_album(&album_name).await;
        tracing::debug!(?result, "deleted album {album_name}");
        result
    })
}
