pub mod backend;
pub mod mock;

use album_client::{AlbumClient, telemetry};
use payloads::{APIClient, Album, AlbumName};
use reqwest::StatusCode;

pub use backend::{Fault, MockBackend, RecordedRequest};

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub address: String,
    /// Raw API client, for setting up state through the routes.
    pub client: APIClient,
    /// Operation handles under test.
    pub albums: AlbumClient,
    /// Direct access to the backend's storage, request log, and fault
    /// injection.
    pub backend: MockBackend,
}

/// Functions to populate test data
///
/// Using anyhow::Result lets us get a backtrace from when the error was first
/// converted to anyhow::Result. Run with RUST_BACKTRACE=1 to view.
impl TestApp {
    /// Create the holiday album through the API.
    pub async fn create_holiday_album(&self) -> anyhow::Result<Album> {
        let details = holiday_album_details();
        self.client.create_album(&details).await?;
        let album = self.client.view_album(&details.name).await?;
        Ok(album)
    }

    /// Create an album with the given images through the API.
    pub async fn create_album_with_images(
        &self,
        name: &str,
        images: &[&str],
    ) -> anyhow::Result<Album> {
        let name = AlbumName::from(name);
        self.client
            .create_album(&payloads::requests::CreateAlbum {
                name: name.clone(),
                description: None,
            })
            .await?;
        if !images.is_empty() {
            let details = payloads::requests::AddMultipleToAlbum {
                album_name: name.clone(),
                paths: images.iter().map(|i| i.to_string()).collect(),
            };
            self.client.add_multiple_to_album(&details).await?;
        }
        Ok(self.client.view_album(&name).await?)
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    telemetry::init_test_subscriber("error");

    let backend = MockBackend::default();
    let (server, port) = backend::build(backend.clone(), "127.0.0.1", port)
        .expect("Failed to bind mock backend");
    tokio::spawn(server);

    let address = format!("http://127.0.0.1:{port}");
    let client = APIClient::new(address.clone());

    TestApp {
        port,
        address,
        albums: AlbumClient::new(client.clone()),
        client,
        backend,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

pub fn holiday_album_details() -> payloads::requests::CreateAlbum {
    payloads::requests::CreateAlbum {
        name: "Holiday 2024".into(),
        description: Some("Two weeks on the coast".into()),
    }
}
