pub mod api_client;
pub mod requests;
pub mod responses;
pub mod state;

pub use api_client::{APIClient, ClientError};
pub use state::{FetchState, RequestError, RequestState};

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Unique name of an album. Albums are addressed by name on every route.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct AlbumName(pub String);

impl From<&str> for AlbumName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for AlbumName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for AlbumName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A named collection of image references.
///
/// The client only ever holds transient copies; the backend owns the
/// canonical album and enforces name uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub name: AlbumName,
    #[serde(default)]
    pub description: Option<String>,
    /// Image paths, in album order.
    #[serde(default)]
    pub images: Vec<String>,
}
