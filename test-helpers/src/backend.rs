//! In-memory album backend speaking the same routes as the real one.
//!
//! Besides serving albums it records every request it receives and can be
//! told to fail or stall, so client behaviour around errors and slow
//! responses can be tested deterministically.

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use actix_web::dev::{HttpServiceFactory, Server};
use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{
    App, HttpRequest, HttpResponse, HttpServer, ResponseError, body::BoxBody,
    delete, get, post, put, web,
};
use payloads::{Album, AlbumName, requests, responses};
use serde_json::Value;

/// A request as the backend saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// Raw, still-encoded query string.
    pub query: String,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

/// A fault injected into the next response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Answer with this status instead of handling the request.
    Status(u16),
    /// Answer 200 with a body that is not JSON.
    Garbled,
}

#[derive(Debug, Default)]
struct BackendState {
    albums: Vec<Album>,
    fault_next: Option<Fault>,
    delays: HashMap<AlbumName, Duration>,
    requests: Vec<RecordedRequest>,
}

#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<BackendState>>,
}

/// Inspection and fault injection
impl MockBackend {
    fn lock(&self) -> MutexGuard<'_, BackendState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn albums(&self) -> Vec<Album> {
        self.lock().albums.clone()
    }

    pub fn album(&self, name: &AlbumName) -> Option<Album> {
        self.lock().albums.iter().find(|a| &a.name == name).cloned()
    }

    /// Insert an album directly, bypassing the routes.
    pub fn insert_album(&self, album: Album) {
        self.lock().albums.push(album);
    }

    /// Make the next request fail with the given status.
    pub fn fail_next(&self, status: reqwest::StatusCode) {
        self.lock().fault_next = Some(Fault::Status(status.as_u16()));
    }

    /// Make the next request succeed with a plain-text body.
    pub fn garble_next(&self) {
        self.lock().fault_next = Some(Fault::Garbled);
    }

    /// Hold every response concerning `name` for `delay`.
    pub fn delay_album(&self, name: impl Into<AlbumName>, delay: Duration) {
        self.lock().delays.insert(name.into(), delay);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    /// Requests received for a route, e.g. `"view-all"`.
    pub fn requests_to(&self, route: &str) -> Vec<RecordedRequest> {
        let path = format!("/albums/{route}");
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    /// Record the request, then apply any injected delay or failure.
    async fn intercept(
        &self,
        req: &HttpRequest,
        body: Option<&Value>,
        album: Option<&AlbumName>,
    ) -> Result<(), MockError> {
        let (forced, delay) = {
            let mut state = self.lock();
            state.requests.push(RecordedRequest {
                method: req.method().to_string(),
                path: req.path().to_string(),
                query: req.query_string().to_string(),
                content_type: req
                    .headers()
                    .get(CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string),
                body: body.cloned(),
            });
            let delay = album.and_then(|name| state.delays.get(name).copied());
            (state.fault_next.take(), delay)
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match forced {
            Some(fault) => Err(MockError::Injected(fault)),
            None => Ok(()),
        }
    }

    fn update_album<T>(
        &self,
        name: &AlbumName,
        f: impl FnOnce(&mut Album) -> Result<T, MockError>,
    ) -> Result<T, MockError> {
        let mut state = self.lock();
        let album = state
            .albums
            .iter_mut()
            .find(|a| &a.name == name)
            .ok_or_else(|| MockError::AlbumNotFound(name.clone()))?;
        f(album)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MockError {
    #[error("Album not found: {0}")]
    AlbumNotFound(AlbumName),
    #[error("Album already exists: {0}")]
    AlbumExists(AlbumName),
    #[error("Image not in album: {0}")]
    ImageNotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(#[from] serde_json::Error),
    #[error("Injected failure")]
    Injected(Fault),
}

impl ResponseError for MockError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        let status = match self {
            Self::AlbumNotFound(_) | Self::ImageNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::AlbumExists(_) => StatusCode::CONFLICT,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Injected(Fault::Status(code)) => {
                StatusCode::from_u16(*code)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Injected(Fault::Garbled) => {
                return HttpResponse::Ok()
                    .content_type("text/plain")
                    .body("<html>Down for maintenance</html>");
            }
        };
        HttpResponse::build(status).body(self.to_string())
    }
}

fn message(text: impl Into<String>) -> responses::SuccessMessage {
    responses::SuccessMessage {
        message: text.into(),
    }
}

pub fn album_services() -> impl HttpServiceFactory {
    web::scope("/albums")
        .service(create_album)
        .service(delete_album)
        .service(view_all)
        .service(view_album)
        .service(add_to_album)
        .service(add_multiple_to_album)
        .service(remove_from_album)
        .service(edit_album_description)
}

/// Build the server, but not await it.
///
/// Returns the server with the port it bound to; binding to port 0 lets
/// the OS assign one.
pub fn build(
    backend: MockBackend,
    ip: &str,
    port: u16,
) -> std::io::Result<(Server, u16)> {
    let listener = TcpListener::bind(format!("{ip}:{port}"))?;
    let port = listener.local_addr()?.port();
    let backend = web::Data::new(backend);
    let server = HttpServer::new(move || {
        App::new()
            .service(album_services())
            .app_data(backend.clone())
    })
    .workers(2)
    .listen(listener)?
    .run();
    Ok((server, port))
}

#[tracing::instrument(skip(req, backend), ret)]
#[post("/create-album")]
async fn create_album(
    req: HttpRequest,
    body: web::Json<Value>,
    backend: web::Data<MockBackend>,
) -> Result<HttpResponse, MockError> {
    let details: requests::CreateAlbum =
        serde_json::from_value(body.0.clone())?;
    backend
        .intercept(&req, Some(&body.0), Some(&details.name))
        .await?;

    let album = Album {
        name: details.name,
        description: details.description,
        images: Vec::new(),
    };
    let mut state = backend.lock();
    if state.albums.iter().any(|a| a.name == album.name) {
        return Err(MockError::AlbumExists(album.name));
    }
    state.albums.push(album.clone());
    Ok(HttpResponse::Ok().json(album))
}

#[tracing::instrument(skip(req, backend), ret)]
#[delete("/delete-album")]
async fn delete_album(
    req: HttpRequest,
    body: web::Json<Value>,
    backend: web::Data<MockBackend>,
) -> Result<HttpResponse, MockError> {
    let details: requests::DeleteAlbum =
        serde_json::from_value(body.0.clone())?;
    backend
        .intercept(&req, Some(&body.0), Some(&details.name))
        .await?;

    let mut state = backend.lock();
    let before = state.albums.len();
    state.albums.retain(|a| a.name != details.name);
    if state.albums.len() == before {
        return Err(MockError::AlbumNotFound(details.name));
    }
    Ok(HttpResponse::Ok().json(message(format!(
        "Album {} deleted",
        details.name
    ))))
}

#[tracing::instrument(skip(req, backend), ret)]
#[get("/view-all")]
async fn view_all(
    req: HttpRequest,
    backend: web::Data<MockBackend>,
) -> Result<HttpResponse, MockError> {
    backend.intercept(&req, None, None).await?;
    Ok(HttpResponse::Ok().json(responses::AlbumList {
        albums: backend.albums(),
    }))
}

#[tracing::instrument(skip(req, backend), ret)]
#[get("/view-album")]
async fn view_album(
    req: HttpRequest,
    query: web::Query<requests::ViewAlbum>,
    backend: web::Data<MockBackend>,
) -> Result<HttpResponse, MockError> {
    backend.intercept(&req, None, Some(&query.album_name)).await?;
    let album = backend
        .album(&query.album_name)
        .ok_or_else(|| MockError::AlbumNotFound(query.album_name.clone()))?;
    Ok(HttpResponse::Ok().json(album))
}

#[tracing::instrument(skip(req, backend), ret)]
#[post("/add-to-album")]
async fn add_to_album(
    req: HttpRequest,
    body: web::Json<Value>,
    backend: web::Data<MockBackend>,
) -> Result<HttpResponse, MockError> {
    let details: requests::AddToAlbum = serde_json::from_value(body.0.clone())?;
    backend
        .intercept(&req, Some(&body.0), Some(&details.album_name))
        .await?;

    backend.update_album(&details.album_name, |album| {
        album.images.push(details.image_path.clone());
        Ok(())
    })?;
    Ok(HttpResponse::Ok().json(message("Image added")))
}

#[tracing::instrument(skip(req, backend), ret)]
#[post("/add-multiple-to-album")]
async fn add_multiple_to_album(
    req: HttpRequest,
    body: web::Json<Value>,
    backend: web::Data<MockBackend>,
) -> Result<HttpResponse, MockError> {
    let details: requests::AddMultipleToAlbum =
        serde_json::from_value(body.0.clone())?;
    backend
        .intercept(&req, Some(&body.0), Some(&details.album_name))
        .await?;

    let count = details.paths.len();
    backend.update_album(&details.album_name, |album| {
        album.images.extend(details.paths);
        Ok(())
    })?;
    Ok(HttpResponse::Ok().json(message(format!("{count} images added"))))
}

#[tracing::instrument(skip(req, backend), ret)]
#[delete("/remove-from-album")]
async fn remove_from_album(
    req: HttpRequest,
    body: web::Json<Value>,
    backend: web::Data<MockBackend>,
) -> Result<HttpResponse, MockError> {
    let details: requests::RemoveFromAlbum =
        serde_json::from_value(body.0.clone())?;
    backend
        .intercept(&req, Some(&body.0), Some(&details.album_name))
        .await?;

    backend.update_album(&details.album_name, |album| {
        let position = album
            .images
            .iter()
            .position(|image| image == &details.path)
            .ok_or_else(|| MockError::ImageNotFound(details.path.clone()))?;
        album.images.remove(position);
        Ok(())
    })?;
    Ok(HttpResponse::Ok().json(message("Image removed")))
}

#[tracing::instrument(skip(req, backend), ret)]
#[put("/edit-album-description")]
async fn edit_album_description(
    req: HttpRequest,
    body: web::Json<Value>,
    backend: web::Data<MockBackend>,
) -> Result<HttpResponse, MockError> {
    let details: requests::EditAlbumDescription =
        serde_json::from_value(body.0.clone())?;
    backend
        .intercept(&req, Some(&body.0), Some(&details.album_name))
        .await?;

    backend.update_album(&details.album_name, |album| {
        album.description = Some(details.new_description.clone());
        Ok(())
    })?;
    Ok(HttpResponse::Ok().json(message("Description updated")))
}
