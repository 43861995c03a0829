use crate::AlbumName;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAlbum {
    pub name: AlbumName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAlbum {
    pub name: AlbumName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToAlbum {
    pub album_name: AlbumName,
    pub image_path: String,
}

/// Adds several images at once. The backend reads the list from `paths`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddMultipleToAlbum {
    pub album_name: AlbumName,
    pub paths: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveFromAlbum {
    pub album_name: AlbumName,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditAlbumDescription {
    pub album_name: AlbumName,
    pub new_description: String,
}

/// Query string for view-album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewAlbum {
    pub album_name: AlbumName,
}
