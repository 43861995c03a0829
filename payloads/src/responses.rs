use crate::Album;
use serde::{Deserialize, Serialize};

/// Body returned by album mutations.
///
/// The backend answers with free-form JSON (the created record, or a status
/// message), so it is passed through to the caller untouched.
pub type Confirmation = serde_json::Value;

/// Body of the view-all route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumList {
    pub albums: Vec<Album>,
}

/// Status message used by mutations that have nothing else to return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessMessage {
    pub message: String,
}
