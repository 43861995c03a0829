//! Hooks for adding images to and removing images from an album.

use payloads::{AlbumName, requests, responses::Confirmation};
use yew::prelude::*;

use crate::get_api_client;

use super::{MutationHookReturn, use_mutation};

/// Takes the album name and one image path.
#[hook]
pub fn use_add_image_to_album()
-> MutationHookReturn<(AlbumName, String), Confirmation> {
    use_mutation(|(album_name, image_path): (AlbumName, String)| {
        let details = requests::AddToAlbum {
            album_name,
            image_path,
        };
        async move { get_api_client().add_to_album(&details).await }
    })
}

/// Takes the album name and the image paths to add, in order.
#[hook]
pub fn use_add_multiple_images_to_album()
-> MutationHookReturn<(AlbumName, Vec<String>), Confirmation> {
    use_mutation(|(album_name, image_paths): (AlbumName, Vec<String>)| {
        tracing::debug!(%album_name, ?image_paths, "adding images");
        let details = requests::AddMultipleToAlbum {
            album_name,
            paths: image_paths,
        };
        async move { get_api_client().add_multiple_to_album(&details).await }
    })
}

/// Takes the album name and the path of the image to remove.
#[hook]
pub fn use_remove_image_from_album()
-> MutationHookReturn<(AlbumName, String), Confirmation> {
    use_mutation(|(album_name, image_path): (AlbumName, String)| {
        let details = requests::RemoveFromAlbum {
            album_name,
            path: image_path,
        };
        async move { get_api_client().remove_from_album(&details).await }
    })
}
