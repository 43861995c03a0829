//! One handle per album operation.
//!
//! Each handle owns its own [`Tracked`] state; handles never share state
//! with each other. Calling `run` while a previous run is still pending
//! starts a second, independent request.

use std::ops::Deref;
use std::sync::Arc;

use payloads::{APIClient, Album, AlbumName, requests, responses};

use crate::tracked::Tracked;

macro_rules! deref_to_tracked {
    ($handle:ty, $data:ty) => {
        impl Deref for $handle {
            type Target = Tracked<$data>;

            fn deref(&self) -> &Self::Target {
                &self.state
            }
        }
    };
}

#[derive(Debug, Clone)]
pub struct CreateAlbum {
    pub(crate) api: Arc<APIClient>,
    pub(crate) state: Tracked<responses::Confirmation>,
}

impl CreateAlbum {
    #[tracing::instrument(skip(self))]
    pub async fn run(
        &self,
        name: AlbumName,
        description: Option<String>,
    ) -> Option<responses::Confirmation> {
        let details = requests::CreateAlbum { name, description };
        self.state.run(self.api.create_album(&details)).await
    }
}

#[derive(Debug, Clone)]
pub struct DeleteAlbum {
    pub(crate) api: Arc<APIClient>,
    pub(crate) state: Tracked<responses::Confirmation>,
}

impl DeleteAlbum {
    #[tracing::instrument(skip(self))]
    pub async fn run(
        &self,
        album_name: AlbumName,
    ) -> Option<responses::Confirmation> {
        let result = self.state.run(self.api.delete_album(&album_name)).await;
        tracing::debug!(?result, "deleted album");
        result
    }
}

/// The album list. Fetched once when created by
/// [`AlbumClient::all_albums`](crate::AlbumClient::all_albums); call
/// [`AllAlbums::refetch`] to load it again.
#[derive(Debug, Clone)]
pub struct AllAlbums {
    pub(crate) api: Arc<APIClient>,
    pub(crate) state: Tracked<Vec<Album>>,
}

impl AllAlbums {
    #[tracing::instrument(skip(self))]
    pub async fn refetch(&self) -> Option<Vec<Album>> {
        let albums = self.state.run(self.api.list_albums()).await;
        if let Some(albums) = &albums {
            tracing::debug!(count = albums.len(), "fetched albums");
        }
        albums
    }

    /// Convenience accessor: the last successfully fetched list, or an
    /// empty list before the first fetch lands.
    pub fn albums(&self) -> Vec<Album> {
        self.state().data.into_option().unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct ViewAlbum {
    pub(crate) api: Arc<APIClient>,
    pub(crate) state: Tracked<Album>,
}

impl ViewAlbum {
    #[tracing::instrument(skip(self))]
    pub async fn run(&self, album_name: AlbumName) -> Option<Album> {
        let album = self.state.run(self.api.view_album(&album_name)).await;
        tracing::debug!(?album, "viewed album");
        album
    }

    pub fn album(&self) -> Option<Album> {
        self.state().data.into_option()
    }
}

#[derive(Debug, Clone)]
pub struct EditAlbumDescription {
    pub(crate) api: Arc<APIClient>,
    pub(crate) state: Tracked<responses::Confirmation>,
}

impl EditAlbumDescription {
    #[tracing::instrument(skip(self))]
    pub async fn run(
        &self,
        album_name: AlbumName,
        new_description: String,
    ) -> Option<responses::Confirmation> {
        let details = requests::EditAlbumDescription {
            album_name,
            new_description,
        };
        self.state
            .run(self.api.edit_album_description(&details))
            .await
    }
}

#[derive(Debug, Clone)]
pub struct AddImageToAlbum {
    pub(crate) api: Arc<APIClient>,
    pub(crate) state: Tracked<responses::Confirmation>,
}

impl AddImageToAlbum {
    #[tracing::instrument(skip(self))]
    pub async fn run(
        &self,
        album_name: AlbumName,
        image_path: String,
    ) -> Option<responses::Confirmation> {
        let details = requests::AddToAlbum {
            album_name,
            image_path,
        };
        self.state.run(self.api.add_to_album(&details)).await
    }
}

#[derive(Debug, Clone)]
pub struct AddMultipleImagesToAlbum {
    pub(crate) api: Arc<APIClient>,
    pub(crate) state: Tracked<responses::Confirmation>,
}

impl AddMultipleImagesToAlbum {
    /// The backend expects the list under `paths`.
    #[tracing::instrument(skip(self))]
    pub async fn run(
        &self,
        album_name: AlbumName,
        image_paths: Vec<String>,
    ) -> Option<responses::Confirmation> {
        let details = requests::AddMultipleToAlbum {
            album_name,
            paths: image_paths,
        };
        let result =
            self.state.run(self.api.add_multiple_to_album(&details)).await;
        tracing::debug!(?result, "added images");
        result
    }
}

#[derive(Debug, Clone)]
pub struct RemoveImageFromAlbum {
    pub(crate) api: Arc<APIClient>,
    pub(crate) state: Tracked<responses::Confirmation>,
}

impl RemoveImageFromAlbum {
    #[tracing::instrument(skip(self))]
    pub async fn run(
        &self,
        album_name: AlbumName,
        image_path: String,
    ) -> Option<responses::Confirmation> {
        let details = requests::RemoveFromAlbum {
            album_name,
            path: image_path,
        };
        self.state.run(self.api.remove_from_album(&details)).await
    }
}

deref_to_tracked!(CreateAlbum, responses::Confirmation);
deref_to_tracked!(DeleteAlbum, responses::Confirmation);
deref_to_tracked!(AllAlbums, Vec<Album>);
deref_to_tracked!(ViewAlbum, Album);
deref_to_tracked!(EditAlbumDescription, responses::Confirmation);
deref_to_tracked!(AddImageToAlbum, responses::Confirmation);
deref_to_tracked!(AddMultipleImagesToAlbum, responses::Confirmation);
deref_to_tracked!(RemoveImageFromAlbum, responses::Confirmation);
