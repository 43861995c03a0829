//! Mock gallery data for the development server and tests.
//!
//! The dataset is created through the API client so it exercises the same
//! routes the UI uses:
//! - an album with a description and several images
//! - an album whose name needs URL escaping
//! - an empty album without a description

use anyhow::Result;
use payloads::{APIClient, Album, AlbumName, requests};

pub struct DevDataset {
    pub holiday: Album,
    pub escaped: Album,
    pub empty: Album,
}

impl DevDataset {
    pub async fn create(client: &APIClient) -> Result<Self> {
        tracing::info!("📷 Creating holiday album");
        let holiday = create_album(
            client,
            "Holiday 2024",
            Some("Two weeks on the coast"),
            &[
                "photos/2024/beach.jpg",
                "photos/2024/harbour.jpg",
                "photos/2024/sunset.jpg",
            ],
        )
        .await?;

        tracing::info!("📷 Creating album with reserved characters");
        let escaped = create_album(
            client,
            "Family & Friends/2023",
            Some("Names with ? and & must be escaped"),
            &["photos/2023/reunion.jpg"],
        )
        .await?;

        tracing::info!("📷 Creating empty album");
        let empty = create_album(client, "Inbox", None, &[]).await?;

        Ok(Self {
            holiday,
            escaped,
            empty,
        })
    }

    pub fn print_summary(&self) {
        tracing::info!("📚 Albums:");
        for album in [&self.holiday, &self.escaped, &self.empty] {
            tracing::info!(
                "   {} ({} images){}",
                album.name,
                album.images.len(),
                album
                    .description
                    .as_ref()
                    .map(|d| format!(": {d}"))
                    .unwrap_or_default()
            );
        }
    }
}

async fn create_album(
    client: &APIClient,
    name: &str,
    description: Option<&str>,
    images: &[&str],
) -> Result<Album> {
    let name = AlbumName::from(name);
    client
        .create_album(&requests::CreateAlbum {
            name: name.clone(),
            description: description.map(str::to_string),
        })
        .await?;
    for image in images {
        client
            .add_to_album(&requests::AddToAlbum {
                album_name: name.clone(),
                image_path: image.to_string(),
            })
            .await?;
    }
    Ok(client.view_album(&name).await?)
}
