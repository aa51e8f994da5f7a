//! External service clients.

pub mod tmdb;

use crate::models::{MovieDetail, UpcomingPage};
use crate::Result;
use async_trait::async_trait;

/// Source of movie listings and records.
///
/// Implemented by [`tmdb::TmdbClient`]; the acquisition pipeline and the
/// detail fetcher only talk to this trait.
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Fetch one page (1-based) of the upcoming movies listing.
    async fn upcoming_page(&self, page: u32) -> Result<UpcomingPage>;

    /// Fetch the full record of a single movie.
    async fn movie_detail(&self, movie_id: u64) -> Result<MovieDetail>;
}
