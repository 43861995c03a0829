use crate::{Album, AlbumName, requests, responses};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};

/// An API client for interfacing with the album backend.
#[derive(Debug, Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/albums/{path}", self.address.trim_end_matches('/'))
    }

    /// Start a request. Every request is sent as JSON, including ones
    /// without a body.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.inner_client
            .request(method, self.format_url(path))
            .header(CONTENT_TYPE, "application/json")
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ClientError> {
        api_call(self.request(Method::GET, path)).await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ClientError> {
        api_call(self.request(method, path).json(body)).await
    }
}

/// Methods on the album API
impl APIClient {
    /// Create a new album. Returns whatever record the backend echoes back.
    pub async fn create_album(
        &self,
        details: &requests::CreateAlbum,
    ) -> Result<responses::Confirmation, ClientError> {
        self.send_json(Method::POST, "create-album", details).await
    }

    pub async fn delete_album(
        &self,
        album_name: &AlbumName,
    ) -> Result<responses::Confirmation, ClientError> {
        let details = requests::DeleteAlbum {
            name: album_name.clone(),
        };
        self.send_json(Method::DELETE, "delete-album", &details).await
    }

    /// List every album, in the order the backend keeps them.
    pub async fn list_albums(&self) -> Result<Vec<Album>, ClientError> {
        let list: responses::AlbumList = self.get("view-all").await?;
        Ok(list.albums)
    }

    /// Fetch a single album. The name is percent-encoded into the query.
    pub async fn view_album(
        &self,
        album_name: &AlbumName,
    ) -> Result<Album, ClientError> {
        self.get(&view_album_path(album_name)).await
    }

    pub async fn edit_album_description(
        &self,
        details: &requests::EditAlbumDescription,
    ) -> Result<responses::Confirmation, ClientError> {
        self.send_json(Method::PUT, "edit-album-description", details)
            .await
    }

    pub async fn add_to_album(
        &self,
        details: &requests::AddToAlbum,
    ) -> Result<responses::Confirmation, ClientError> {
        self.send_json(Method::POST, "add-to-album", details).await
    }

    pub async fn add_multiple_to_album(
        &self,
        details: &requests::AddMultipleToAlbum,
    ) -> Result<responses::Confirmation, ClientError> {
        self.send_json(Method::POST, "add-multiple-to-album", details)
            .await
    }

    pub async fn remove_from_album(
        &self,
        details: &requests::RemoveFromAlbum,
    ) -> Result<responses::Confirmation, ClientError> {
        self.send_json(Method::DELETE, "remove-from-album", details)
            .await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A non-success response, with the response text kept for debugging.
    #[error("API call failed: {}", status_text(.0))]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Invalid response from server: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::APIError(status, _) => Some(*status),
            Self::Network(e) => e.status(),
            Self::Decode(_) => None,
        }
    }
}

/// Spaces become `%20`, never `+`, and `/`, `&`, `?` are escaped.
fn view_album_path(album_name: &AlbumName) -> String {
    format!(
        "view-album?album_name={}",
        urlencoding::encode(album_name.as_ref())
    )
}

fn status_text(status: &StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("")
}

/// Send a request and parse a successful JSON response.
pub async fn api_call<T: DeserializeOwned>(
    request: RequestBuilder,
) -> Result<T, ClientError> {
    let response = request.send().await?;
    ok_body(response).await
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
