//! Upcoming command implementation.
//!
//! Fetches the configured number of pages, then searches and sorts them
//! locally before printing.

use super::spinner;
use crate::core::acquisition::UpcomingCatalog;
use crate::core::query::derive_displayed;
use crate::generators::listing::{self, ListingFormat};
use crate::models::config::Config;
use crate::models::{QueryParameters, SortOption};
use crate::services::tmdb::TmdbClient;
use crate::Result;

/// Execute the upcoming command.
pub async fn upcoming(
    config: &Config,
    pages: Option<u32>,
    search: Option<&str>,
    sort: SortOption,
    format: ListingFormat,
) -> Result<()> {
    let client = TmdbClient::new(config.tmdb.clone());
    let page_count = pages.unwrap_or(config.upcoming.pages);

    let pb = spinner("Loading movies...");
    let mut catalog = UpcomingCatalog::new();
    let result = catalog.refresh(&client, page_count).await;
    pb.finish_and_clear();
    result?;

    let params = QueryParameters::new(search.unwrap_or(""), sort);
    let displayed = derive_displayed(catalog.movies(), &params);
    print!("{}", listing::render(format, &displayed, &params, &config.images)?);

    Ok(())
}
