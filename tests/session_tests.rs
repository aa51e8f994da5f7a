//! Integration tests for the browse session.
//!
//! Tests cover:
//! - Explicit recomputation on every query or data change
//! - Stale listing kept after a failed refresh
//! - Displayed ids resolving through the detail fetcher

mod common;

use common::{detail, page_of, ScriptedSource};
use release_radar::core::session::BrowseSession;
use release_radar::models::{FetchStatus, MovieSummary, SortOption};

fn ids(movies: &[MovieSummary]) -> Vec<u64> {
    movies.iter().map(|m| m.id).collect()
}

fn alpha_beta_source() -> ScriptedSource {
    ScriptedSource::new().with_page(
        1,
        vec![
            MovieSummary::new(1, "Beta", "2024-05-01"),
            MovieSummary::new(2, "Alpha", "2024-01-01"),
        ],
    )
}

#[tokio::test]
async fn test_initial_load_shows_canonical_order() {
    let source = alpha_beta_source();
    let session = BrowseSession::with_source(&source, 1).await;

    assert_eq!(session.listing_status(), &FetchStatus::Ready);
    assert_eq!(ids(session.displayed()), vec![1, 2]);
}

#[tokio::test]
async fn test_query_changes_recompute_displayed() {
    let source = alpha_beta_source();
    let mut session = BrowseSession::with_source(&source, 1).await;

    session.set_sort_option(SortOption::TitleAsc);
    assert_eq!(ids(session.displayed()), vec![2, 1]);

    session.set_search_term("bet");
    assert_eq!(ids(session.displayed()), vec![1]);

    session.set_search_term("");
    session.set_sort_option(SortOption::None);
    assert_eq!(ids(session.displayed()), vec![1, 2]);

    // The canonical collection is never reordered by queries.
    assert_eq!(ids(session.canonical()), vec![1, 2]);
}

#[tokio::test]
async fn test_refresh_reapplies_current_query() {
    let mut session = BrowseSession::new();
    session.set_search_term("movie 2");

    let source = ScriptedSource::new()
        .with_page(1, page_of(1, 3))
        .with_page(2, page_of(20, 3));
    session.refresh(&source, 2).await.unwrap();

    assert_eq!(ids(session.displayed()), vec![2, 20, 21, 22]);
}

#[tokio::test]
async fn test_failed_refresh_keeps_displayed_list() {
    let source = alpha_beta_source();
    let mut session = BrowseSession::with_source(&source, 1).await;
    session.set_sort_option(SortOption::DateDesc);

    let limited = ScriptedSource::new()
        .with_page(1, page_of(100, 20))
        .with_page_status(2, 429);
    assert!(session.refresh(&limited, 2).await.is_err());

    assert_eq!(ids(session.displayed()), vec![1, 2]);
    assert!(session.listing_status().error().is_some());
}

#[tokio::test]
async fn test_failed_first_load_reports_error() {
    let source = ScriptedSource::new().with_page_status(1, 401);
    let session = BrowseSession::with_source(&source, 1).await;

    assert!(session.displayed().is_empty());
    assert_eq!(
        session.listing_status().error(),
        Some("TMDB request failed (401). Check your token and quota.")
    );
}

#[tokio::test]
async fn test_displayed_ids_open_details() {
    let source = alpha_beta_source()
        .with_detail(detail(1, "Beta"))
        .with_detail(detail(2, "Alpha"));
    let mut session = BrowseSession::with_source(&source, 1).await;
    session.set_search_term("alp");

    let movie_id = session.displayed()[0].id;
    let status = session.open(&source, movie_id).await.clone();

    assert_eq!(status, FetchStatus::Ready);
    assert_eq!(
        session.detail().detail().and_then(|d| d.title.as_deref()),
        Some("Alpha")
    );
    assert_eq!(source.detail_calls(), vec![2]);
}
