//! Single movie detail fetching.
//!
//! Every fetch is tagged with a generation number. A response is applied only
//! when its ticket is still the latest one handed out, so an older request
//! that resolves late can never overwrite a newer selection.

use crate::models::{FetchStatus, MovieDetail};
use crate::services::MovieSource;
use crate::Result;

/// Handle for one in-flight detail request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailTicket {
    pub movie_id: u64,
    pub generation: u64,
}

/// Owner of the currently shown movie detail and its fetch status.
#[derive(Debug, Default)]
pub struct DetailFetcher {
    detail: Option<MovieDetail>,
    status: FetchStatus,
    movie_id: Option<u64>,
    generation: u64,
}

impl DetailFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn detail(&self) -> Option<&MovieDetail> {
        self.detail.as_ref()
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    /// The identifier most recently requested.
    pub fn movie_id(&self) -> Option<u64> {
        self.movie_id
    }

    /// Start a request for `movie_id`, superseding any outstanding one.
    pub fn begin(&mut self, movie_id: u64) -> DetailTicket {
        self.generation += 1;
        self.movie_id = Some(movie_id);
        self.status = FetchStatus::Loading;
        DetailTicket {
            movie_id,
            generation: self.generation,
        }
    }

    /// Apply a response. Returns `false` when the ticket has been superseded.
    pub fn complete(&mut self, ticket: DetailTicket, result: Result<MovieDetail>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                "Dropping stale detail response for movie {} (generation {} < {})",
                ticket.movie_id,
                ticket.generation,
                self.generation
            );
            return false;
        }

        match result {
            Ok(detail) => {
                self.detail = Some(detail);
                self.status = FetchStatus::Ready;
            }
            Err(e) => {
                tracing::warn!("Error fetching movie detail {}: {}", ticket.movie_id, e);
                self.detail = None;
                self.status = FetchStatus::Failed(e.to_string());
            }
        }
        true
    }

    /// Fetch and apply the detail for `movie_id`.
    pub async fn fetch(&mut self, source: &dyn MovieSource, movie_id: u64) -> &FetchStatus {
        let ticket = self.begin(movie_id);
        let result = source.movie_detail(movie_id).await;
        self.complete(ticket, result);
        &self.status
    }
}

/// Fetch a single movie record without keeping any state.
pub async fn fetch_detail(source: &dyn MovieSource, movie_id: u64) -> Result<MovieDetail> {
    source.movie_detail(movie_id).await
}
