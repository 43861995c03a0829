use payloads::AlbumName;
use serde_json::json;
use test_helpers::spawn_app;

#[tokio::test]
async fn view_album_escapes_the_name() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let album = app.create_album_with_images("My Album/1", &[]).await?;
    assert_eq!(album.name, AlbumName::from("My Album/1"));

    let view = app.albums.view_album();
    let viewed = view.run(AlbumName::from("My Album/1")).await.unwrap();
    assert_eq!(viewed, album);

    let request = app.backend.requests_to("view-album").pop().unwrap();
    assert_eq!(request.method, "GET");
    assert_eq!(request.query, "album_name=My%20Album%2F1");

    Ok(())
}

#[tokio::test]
async fn reserved_characters_round_trip() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let name = "Family & Friends?/2023";
    app.create_album_with_images(name, &["reunion.jpg"]).await?;

    let view = app.albums.view_album();
    let album = view.run(AlbumName::from(name)).await.unwrap();
    assert_eq!(album.name.0, name);
    assert_eq!(album.images, ["reunion.jpg"]);

    let request = app.backend.requests_to("view-album").pop().unwrap();
    assert_eq!(request.query, "album_name=Family%20%26%20Friends%3F%2F2023");

    Ok(())
}

#[tokio::test]
async fn add_multiple_sends_paths() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_album_with_images("Trip", &[]).await?;

    let add_multiple = app.albums.add_multiple_images_to_album();
    add_multiple
        .run(AlbumName::from("Trip"), vec!["a.jpg".into(), "b.jpg".into()])
        .await
        .unwrap();

    let request = app
        .backend
        .requests_to("add-multiple-to-album")
        .pop()
        .unwrap();
    assert_eq!(request.method, "POST");
    assert_eq!(
        request.body,
        Some(json!({"album_name": "Trip", "paths": ["a.jpg", "b.jpg"]}))
    );

    Ok(())
}

#[tokio::test]
async fn mutation_bodies_match_the_routes() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.albums
        .create_album()
        .run(AlbumName::from("Inbox"), None)
        .await
        .unwrap();
    app.albums
        .add_image_to_album()
        .run(AlbumName::from("Inbox"), "scan.png".into())
        .await
        .unwrap();
    app.albums
        .edit_album_description()
        .run(AlbumName::from("Inbox"), "Unsorted".into())
        .await
        .unwrap();
    app.albums
        .remove_image_from_album()
        .run(AlbumName::from("Inbox"), "scan.png".into())
        .await
        .unwrap();
    app.albums
        .delete_album()
        .run(AlbumName::from("Inbox"))
        .await
        .unwrap();

    let seen: Vec<_> = app
        .backend
        .requests()
        .into_iter()
        .map(|r| (r.method, r.path, r.body))
        .collect();
    assert_eq!(
        seen,
        [
            (
                "POST".to_string(),
                "/albums/create-album".to_string(),
                Some(json!({"name": "Inbox"})),
            ),
            (
                "POST".to_string(),
                "/albums/add-to-album".to_string(),
                Some(json!({"album_name": "Inbox", "image_path": "scan.png"})),
            ),
            (
                "PUT".to_string(),
                "/albums/edit-album-description".to_string(),
                Some(json!({
                    "album_name": "Inbox",
                    "new_description": "Unsorted"
                })),
            ),
            (
                "DELETE".to_string(),
                "/albums/remove-from-album".to_string(),
                Some(json!({"album_name": "Inbox", "path": "scan.png"})),
            ),
            (
                "DELETE".to_string(),
                "/albums/delete-album".to_string(),
                Some(json!({"name": "Inbox"})),
            ),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn every_request_is_sent_as_json() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_holiday_album().await?;
    app.client.list_albums().await?;

    let requests = app.backend.requests();
    assert!(!requests.is_empty());
    for request in requests {
        assert_eq!(
            request.content_type.as_deref(),
            Some("application/json"),
            "{} {}",
            request.method,
            request.path
        );
    }

    Ok(())
}
