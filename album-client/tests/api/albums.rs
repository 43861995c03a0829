use payloads::{AlbumName, FetchState};
use reqwest::StatusCode;
use test_helpers::{assert_status_code, holiday_album_details, spawn_app};

#[tokio::test]
async fn create_read_update_delete_album() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let details = holiday_album_details();

    let create = app.albums.create_album();
    let created = create
        .run(details.name.clone(), details.description.clone())
        .await
        .expect("create should succeed");
    assert_eq!(created["name"], "Holiday 2024");
    assert_eq!(create.state().data, FetchState::Fetched(created));

    let view = app.albums.view_album();
    let album = view.run(details.name.clone()).await.unwrap();
    assert_eq!(album.description.as_deref(), Some("Two weeks on the coast"));
    assert!(album.images.is_empty());
    assert_eq!(view.album(), Some(album));

    let edit = app.albums.edit_album_description();
    edit.run(details.name.clone(), "Three weeks, actually".into())
        .await
        .unwrap();
    assert_eq!(edit.state().error, None);
    let album = view.run(details.name.clone()).await.unwrap();
    assert_eq!(album.description.as_deref(), Some("Three weeks, actually"));

    let delete = app.albums.delete_album();
    delete.run(details.name.clone()).await.unwrap();
    assert!(app.backend.albums().is_empty());
    assert_status_code(
        app.client.view_album(&details.name).await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}

#[tokio::test]
async fn duplicate_album_name_is_reported_in_state() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_holiday_album().await?;
    let details = holiday_album_details();

    let create = app.albums.create_album();
    let result = create.run(details.name, None).await;
    assert!(result.is_none());

    let state = create.state();
    assert!(!state.is_loading);
    assert!(!state.data.is_fetched());
    let error = state.error.expect("error should be recorded");
    assert_eq!(error.status, Some(StatusCode::CONFLICT));
    assert_eq!(error.message, "API call failed: Conflict");

    Ok(())
}

#[tokio::test]
async fn viewing_a_missing_album_sets_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let view = app.albums.view_album();
    assert!(view.run(AlbumName::from("Nowhere")).await.is_none());

    let error = view.state().error.unwrap();
    assert_eq!(error.status, Some(StatusCode::NOT_FOUND));
    assert_eq!(view.album(), None);

    Ok(())
}

#[tokio::test]
async fn deleting_a_missing_album_fails() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let delete = app.albums.delete_album();
    assert!(delete.run(AlbumName::from("Nowhere")).await.is_none());
    assert_eq!(
        delete.state().error.and_then(|e| e.status),
        Some(StatusCode::NOT_FOUND)
    );

    Ok(())
}

#[tokio::test]
async fn album_list_keeps_backend_order() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_album_with_images("Zoo", &["zoo/lion.jpg"]).await?;
    app.create_album_with_images("Aquarium", &[]).await?;

    let albums = app.albums.all_albums();
    let mut updates = albums.subscribe();
    updates.wait_for(|state| state.is_settled()).await?;

    let names: Vec<_> =
        albums.albums().into_iter().map(|a| a.name.0).collect();
    assert_eq!(names, ["Zoo", "Aquarium"]);
    assert_eq!(albums.albums()[0].images, ["zoo/lion.jpg"]);

    Ok(())
}

#[tokio::test]
async fn handles_do_not_share_state() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_holiday_album().await?;

    let first = app.albums.view_album();
    let second = app.albums.view_album();
    first.run(holiday_album_details().name).await.unwrap();

    assert!(first.state().data.is_fetched());
    assert_eq!(second.state(), Default::default());

    Ok(())
}
