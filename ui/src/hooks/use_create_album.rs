use payloads::{AlbumName, requests, responses::Confirmation};
use yew::prelude::*;

use crate::get_api_client;

use super::{MutationHookReturn, use_mutation};

/// Hook to create an album from a name and optional description.
#[hook]
pub fn use_create_album()
-> MutationHookReturn<(AlbumName, Option<String>), Confirmation> {
    use_mutation(|(name, description): (AlbumName, Option<String>)| {
        let details = requests::CreateAlbum { name, description };
        async move { get_api_client().create_album(&details).await }
    })
}
