//! Upcoming movies acquisition.
//!
//! Pages are fetched strictly one after another so the canonical list keeps
//! page order followed by in-page order. The first failing page aborts the
//! whole run and nothing fetched so far is kept.

use crate::models::{FetchStatus, MovieSummary};
use crate::services::MovieSource;
use crate::Result;

/// Fetch `page_count` pages of upcoming movies, starting at page 1.
pub async fn fetch_upcoming(
    source: &dyn MovieSource,
    page_count: u32,
) -> Result<Vec<MovieSummary>> {
    if page_count == 0 {
        return Err(crate::Error::other("page count must be at least 1"));
    }

    let mut movies = Vec::new();
    for page in 1..=page_count {
        tracing::debug!("Fetching upcoming page {}/{}", page, page_count);
        let result = source.upcoming_page(page).await?;
        movies.extend(result.results);
    }

    tracing::info!(
        "Fetched {} upcoming movies across {} pages",
        movies.len(),
        page_count
    );
    Ok(movies)
}

/// Owner of the canonical upcoming collection and its fetch status.
#[derive(Debug, Default)]
pub struct UpcomingCatalog {
    movies: Vec<MovieSummary>,
    status: FetchStatus,
}

impl UpcomingCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical collection.
    pub fn movies(&self) -> &[MovieSummary] {
        &self.movies
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    /// Re-run the acquisition.
    ///
    /// On success the collection is replaced wholesale. On failure the
    /// previous collection stays visible and the status carries the error.
    pub async fn refresh(&mut self, source: &dyn MovieSource, page_count: u32) -> Result<()> {
        self.status = FetchStatus::Loading;

        match fetch_upcoming(source, page_count).await {
            Ok(movies) => {
                self.movies = movies;
                self.status = FetchStatus::Ready;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Error fetching movies: {}", e);
                self.status = FetchStatus::Failed(e.to_string());
                Err(e)
            }
        }
    }
}
