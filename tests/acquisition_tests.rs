//! Integration tests for the upcoming movies acquisition.
//!
//! Tests cover:
//! - Sequential page fetching and page-order concatenation
//! - Abort on the first failing page
//! - Catalog status transitions and keeping the previous list on failure

mod common;

use common::{page_of, ScriptedSource};
use release_radar::core::acquisition::{fetch_upcoming, UpcomingCatalog};
use release_radar::models::config::TmdbConfig;
use release_radar::models::FetchStatus;
use release_radar::services::tmdb::TmdbClient;
use release_radar::Error;

#[tokio::test]
async fn test_pages_concatenated_in_order() {
    let source = ScriptedSource::new()
        .with_page(1, page_of(100, 3))
        .with_page(2, page_of(200, 2))
        .with_page(3, page_of(300, 1));

    let movies = fetch_upcoming(&source, 3).await.unwrap();

    let ids: Vec<u64> = movies.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![100, 101, 102, 200, 201, 300]);
    assert_eq!(source.page_calls(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_only_requested_pages_fetched() {
    let source = ScriptedSource::new()
        .with_page(1, page_of(1, 20))
        .with_page(2, page_of(21, 20));

    let movies = fetch_upcoming(&source, 1).await.unwrap();
    assert_eq!(movies.len(), 20);
    assert_eq!(source.page_calls(), vec![1]);
}

#[tokio::test]
async fn test_failing_page_aborts_remaining_pages() {
    let source = ScriptedSource::new()
        .with_page(1, page_of(1, 20))
        .with_page_status(2, 429)
        .with_page(3, page_of(41, 20));

    let result = fetch_upcoming(&source, 3).await;

    assert!(matches!(result, Err(Error::RequestFailed { status: 429 })));
    assert_eq!(source.page_calls(), vec![1, 2]);
}

#[tokio::test]
async fn test_transport_error_is_reported() {
    let source = ScriptedSource::new().with_page_transport_error(1, "connection reset");

    match fetch_upcoming(&source, 2).await {
        Err(Error::Transport(message)) => assert_eq!(message, "connection reset"),
        other => panic!("Expected Transport error, got {:?}", other),
    }
    assert_eq!(source.page_calls(), vec![1]);
}

#[tokio::test]
async fn test_zero_pages_rejected_without_requests() {
    let source = ScriptedSource::new().with_page(1, page_of(1, 1));
    assert!(fetch_upcoming(&source, 0).await.is_err());
    assert!(source.page_calls().is_empty());
}

#[tokio::test]
async fn test_missing_credential_makes_no_request() {
    let client = TmdbClient::new(TmdbConfig {
        bearer_token: None,
        base_url: "http://127.0.0.1:9/3".to_string(),
        ..Default::default()
    });

    let mut catalog = UpcomingCatalog::new();
    let result = catalog.refresh(&client, 5).await;

    assert!(matches!(result, Err(Error::MissingCredential)));
    assert_eq!(
        catalog.status().error(),
        Some("Missing TMDB token. Set TMDB_BEARER_TOKEN in your environment.")
    );
    assert!(catalog.movies().is_empty());
}

// ========== CATALOG STATE ==========

#[tokio::test]
async fn test_catalog_success_replaces_collection() {
    let mut catalog = UpcomingCatalog::new();
    assert_eq!(catalog.status(), &FetchStatus::Idle);

    let first = ScriptedSource::new().with_page(1, page_of(1, 3));
    catalog.refresh(&first, 1).await.unwrap();
    assert_eq!(catalog.status(), &FetchStatus::Ready);
    assert_eq!(catalog.movies().len(), 3);

    let second = ScriptedSource::new().with_page(1, page_of(50, 2));
    catalog.refresh(&second, 1).await.unwrap();
    let ids: Vec<u64> = catalog.movies().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![50, 51]);
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_collection() {
    let mut catalog = UpcomingCatalog::new();
    let good = ScriptedSource::new()
        .with_page(1, page_of(1, 20))
        .with_page(2, page_of(21, 20));
    catalog.refresh(&good, 2).await.unwrap();

    // Page 1 succeeds, page 2 is rate limited.
    let limited = ScriptedSource::new()
        .with_page(1, page_of(500, 20))
        .with_page_status(2, 429);
    let result = catalog.refresh(&limited, 2).await;

    assert!(matches!(result, Err(Error::RequestFailed { status: 429 })));
    assert_eq!(catalog.movies().len(), 40);
    assert_eq!(catalog.movies()[0].id, 1);
    assert_eq!(
        catalog.status(),
        &FetchStatus::Failed("TMDB request failed (429). Check your token and quota.".to_string())
    );
}

#[tokio::test]
async fn test_failed_first_load_leaves_collection_empty() {
    let mut catalog = UpcomingCatalog::new();
    let limited = ScriptedSource::new()
        .with_page(1, page_of(1, 20))
        .with_page_status(2, 429);

    assert!(catalog.refresh(&limited, 2).await.is_err());
    assert!(catalog.movies().is_empty());
}

#[tokio::test]
async fn test_error_cleared_on_next_success() {
    let mut catalog = UpcomingCatalog::new();
    let broken = ScriptedSource::new().with_page_status(1, 500);
    assert!(catalog.refresh(&broken, 1).await.is_err());
    assert!(catalog.status().error().is_some());

    let good = ScriptedSource::new().with_page(1, page_of(1, 1));
    catalog.refresh(&good, 1).await.unwrap();
    assert!(catalog.status().error().is_none());
}
