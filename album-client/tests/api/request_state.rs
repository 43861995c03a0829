use std::time::Duration;

use album_client::AlbumClient;
use payloads::{APIClient, Album, AlbumName, FetchState};
use reqwest::StatusCode;
use test_helpers::spawn_app;

fn album(name: &str) -> Album {
    Album {
        name: AlbumName::from(name),
        description: None,
        images: vec![format!("{name}.jpg")],
    }
}

#[tokio::test]
async fn loading_flag_goes_up_then_down() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend.insert_album(album("Slow"));
    app.backend
        .delay_album("Slow", Duration::from_millis(200));

    let view = app.albums.view_album();
    let mut updates = view.subscribe();
    assert!(!view.state().is_loading);

    let task = tokio::spawn({
        let view = view.clone();
        async move { view.run(AlbumName::from("Slow")).await }
    });

    let pending = updates.wait_for(|state| state.is_loading).await?.clone();
    assert_eq!(pending.error, None);
    assert!(pending.is_initial_loading());

    let result = task.await?;
    assert_eq!(result, Some(album("Slow")));
    let state = view.state();
    assert!(!state.is_loading);
    assert_eq!(state.data, FetchState::Fetched(album("Slow")));

    Ok(())
}

#[tokio::test]
async fn error_is_cleared_when_a_new_request_starts() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let view = app.albums.view_album();
    view.run(AlbumName::from("Slow")).await;
    assert!(view.state().error.is_some());

    app.backend.insert_album(album("Slow"));
    app.backend
        .delay_album("Slow", Duration::from_millis(200));
    let mut updates = view.subscribe();
    let task = tokio::spawn({
        let view = view.clone();
        async move { view.run(AlbumName::from("Slow")).await }
    });

    let pending = updates
        .wait_for(|state| state.is_loading && state.error.is_none())
        .await?
        .clone();
    assert!(!pending.data.is_fetched());

    task.await?;
    assert_eq!(view.state().error, None);
    assert_eq!(view.album(), Some(album("Slow")));

    Ok(())
}

#[tokio::test]
async fn failed_request_keeps_previous_data() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend.insert_album(album("Kept"));

    let view = app.albums.view_album();
    view.run(AlbumName::from("Kept")).await.unwrap();

    app.backend.fail_next(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(view.run(AlbumName::from("Kept")).await.is_none());

    let state = view.state();
    assert!(!state.is_loading);
    assert_eq!(state.data, FetchState::Fetched(album("Kept")));
    let error = state.error.unwrap();
    assert_eq!(error.status, Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(error.message, "API call failed: Internal Server Error");

    Ok(())
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() -> anyhow::Result<()> {
    // Bind then release a port so nothing is listening on it.
    let port = std::net::TcpListener::bind("127.0.0.1:0")?
        .local_addr()?
        .port();
    let albums =
        AlbumClient::new(APIClient::new(format!("http://127.0.0.1:{port}")));

    let view = albums.view_album();
    assert!(view.run(AlbumName::from("Anything")).await.is_none());

    let state = view.state();
    assert!(!state.is_loading);
    assert!(!state.data.is_fetched());
    let error = state.error.unwrap();
    assert_eq!(error.status, None);
    assert_eq!(error.message, "Network error. Please check your connection.");

    Ok(())
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend.insert_album(album("Kept"));

    let view = app.albums.view_album();
    view.run(AlbumName::from("Kept")).await.unwrap();

    app.backend.garble_next();
    assert!(view.run(AlbumName::from("Kept")).await.is_none());

    let state = view.state();
    assert!(!state.is_loading);
    assert_eq!(state.data, FetchState::Fetched(album("Kept")));
    let error = state.error.unwrap();
    assert_eq!(error.status, None);
    assert!(
        error.message.starts_with("Invalid response from server"),
        "{}",
        error.message
    );

    Ok(())
}

#[tokio::test]
async fn album_list_fetches_on_mount_and_on_refetch() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend.insert_album(album("First"));

    let albums = app.albums.all_albums();
    assert!(albums.state().is_loading);
    let mut updates = albums.subscribe();
    updates.wait_for(|state| state.is_settled()).await?;

    assert_eq!(albums.albums(), [album("First")]);
    assert_eq!(app.backend.requests_to("view-all").len(), 1);

    app.backend.insert_album(album("Second"));
    let refetched = albums.refetch().await.unwrap();
    assert_eq!(refetched, [album("First"), album("Second")]);
    assert_eq!(albums.albums(), refetched);
    assert_eq!(app.backend.requests_to("view-all").len(), 2);

    Ok(())
}

#[tokio::test]
async fn album_list_failure_on_mount() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend.fail_next(StatusCode::SERVICE_UNAVAILABLE);

    let albums = app.albums.all_albums();
    let mut updates = albums.subscribe();
    updates.wait_for(|state| state.is_settled()).await?;

    assert!(albums.albums().is_empty());
    assert_eq!(
        albums.state().error.and_then(|e| e.status),
        Some(StatusCode::SERVICE_UNAVAILABLE)
    );

    // A manual refetch recovers.
    albums.refetch().await;
    assert_eq!(albums.state().error, None);
    assert!(albums.state().data.is_fetched());

    Ok(())
}

#[tokio::test]
async fn overlapping_requests_last_response_wins() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend.insert_album(album("Slow"));
    app.backend.insert_album(album("Fast"));
    app.backend
        .delay_album("Slow", Duration::from_millis(300));

    let view = app.albums.view_album();
    let (slow, fast) = tokio::join!(
        view.run(AlbumName::from("Slow")),
        view.run(AlbumName::from("Fast")),
    );

    // Both requests resolve on their own.
    assert_eq!(slow, Some(album("Slow")));
    assert_eq!(fast, Some(album("Fast")));

    // The slow request was issued first but answered last.
    let state = view.state();
    assert!(!state.is_loading);
    assert_eq!(state.data, FetchState::Fetched(album("Slow")));
    assert_eq!(app.backend.requests_to("view-album").len(), 2);

    Ok(())
}
