//! Native album client.
//!
//! [`AlbumClient`] hands out one handle per operation. A handle wraps a
//! single backend route and keeps the request state (data, loading flag,
//! error) for whoever created it. Errors never escape a handle: they land
//! in the state, and `run` returns `None`.

pub mod operations;
pub mod telemetry;
pub mod tracked;

use std::sync::Arc;

use payloads::APIClient;

pub use operations::{
    AddImageToAlbum, AddMultipleImagesToAlbum, AllAlbums, CreateAlbum,
    DeleteAlbum, EditAlbumDescription, RemoveImageFromAlbum, ViewAlbum,
};
pub use tracked::Tracked;

#[derive(Debug, Clone)]
pub struct AlbumClient {
    api: Arc<APIClient>,
}

impl AlbumClient {
    pub fn new(api: APIClient) -> Self {
        Self { api: Arc::new(api) }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(APIClient::new(config.backend_url.clone()))
    }

    pub fn api(&self) -> &APIClient {
        &self.api
    }

    pub fn create_album(&self) -> CreateAlbum {
        CreateAlbum {
            api: self.api.clone(),
            state: Tracked::default(),
        }
    }

    pub fn delete_album(&self) -> DeleteAlbum {
        DeleteAlbum {
            api: self.api.clone(),
            state: Tracked::default(),
        }
    }

    /// Create an album list handle and start loading it.
    ///
    /// The first fetch is spawned onto the current tokio runtime, so the
    /// handle is already pending when this returns. Panics outside of a
    /// runtime.
    pub fn all_albums(&self) -> AllAlbums {
        let albums = AllAlbums {
            api: self.api.clone(),
            state: Tracked::default(),
        };
        albums.state.begin();

        let mount = albums.clone();
        tokio::spawn(async move {
            mount.refetch().await;
        });
        albums
    }

    pub fn view_album(&self) -> ViewAlbum {
        ViewAlbum {
            api: self.api.clone(),
            state: Tracked::default(),
        }
    }

    pub fn edit_album_description(&self) -> EditAlbumDescription {
        EditAlbumDescription {
            api: self.api.clone(),
            state: Tracked::default(),
        }
    }

    pub fn add_image_to_album(&self) -> AddImageToAlbum {
        AddImageToAlbum {
            api: self.api.clone(),
            state: Tracked::default(),
        }
    }

    pub fn add_multiple_images_to_album(&self) -> AddMultipleImagesToAlbum {
        AddMultipleImagesToAlbum {
            api: self.api.clone(),
            state: Tracked::default(),
        }
    }

    pub fn remove_image_from_album(&self) -> RemoveImageFromAlbum {
        RemoveImageFromAlbum {
            api: self.api.clone(),
            state: Tracked::default(),
        }
    }
}

/// Client configuration.
///
/// Environment variables can be set directly or loaded from a .env file by
/// the binary before calling [`Config::from_env`].
///
/// - BACKEND_URL: base address of the album backend, e.g.
///   `http://127.0.0.1:8000`
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("BACKEND_URL must be set")]
    MissingBackendUrl(#[source] std::env::VarError),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend_url = std::env::var("BACKEND_URL")
            .map_err(ConfigError::MissingBackendUrl)?;
        Ok(Config { backend_url })
    }
}
