use payloads::{AlbumName, requests, responses::Confirmation};
use yew::prelude::*;

use crate::get_api_client;

use super::{MutationHookReturn, use_mutation};

#[hook]
pub fn use_edit_album_description()
-> MutationHookReturn<(AlbumName, String), Confirmation> {
    use_mutation(|(album_name, new_description): (AlbumName, String)| {
        let details = requests::EditAlbumDescription {
            album_name,
            new_description,
        };
        async move { get_api_client().edit_album_description(&details).await }
    })
}
