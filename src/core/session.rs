//! Browse session state.
//!
//! All view state lives here and is owned explicitly. Each mutation that
//! affects the displayed list ends with a call to [`BrowseSession::recompute`].

use super::acquisition::UpcomingCatalog;
use super::detail::DetailFetcher;
use super::query::derive_displayed;
use crate::models::{FetchStatus, MovieSummary, QueryParameters, SortOption};
use crate::services::MovieSource;
use crate::Result;

/// A command typed at the browse prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Search(String),
    ClearSearch,
    Sort(SortOption),
    Open(u64),
    Refresh,
    List,
    Help,
    Quit,
}

impl BrowseCommand {
    /// Parse one prompt line.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "search" | "s" => Ok(BrowseCommand::Search(rest.to_string())),
            "clear" => Ok(BrowseCommand::ClearSearch),
            "sort" => Ok(BrowseCommand::Sort(rest.parse()?)),
            "open" | "o" => rest
                .parse()
                .map(BrowseCommand::Open)
                .map_err(|_| crate::Error::InvalidCommand(format!("not a movie id: {:?}", rest))),
            "refresh" | "r" => Ok(BrowseCommand::Refresh),
            "list" | "ls" | "" => Ok(BrowseCommand::List),
            "help" | "?" => Ok(BrowseCommand::Help),
            "quit" | "exit" | "q" => Ok(BrowseCommand::Quit),
            other => Err(crate::Error::InvalidCommand(other.to_string())),
        }
    }
}

/// Listing, query and detail state for one interactive session.
#[derive(Debug, Default)]
pub struct BrowseSession {
    catalog: UpcomingCatalog,
    params: QueryParameters,
    displayed: Vec<MovieSummary>,
    detail: DetailFetcher,
}

impl BrowseSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-fetched canonical collection.
    pub async fn with_source(source: &dyn MovieSource, page_count: u32) -> Self {
        let mut session = Self::new();
        // A failed first load is reflected in the catalog status.
        let _ = session.refresh(source, page_count).await;
        session
    }

    pub fn params(&self) -> &QueryParameters {
        &self.params
    }

    pub fn canonical(&self) -> &[MovieSummary] {
        self.catalog.movies()
    }

    pub fn displayed(&self) -> &[MovieSummary] {
        &self.displayed
    }

    pub fn listing_status(&self) -> &FetchStatus {
        self.catalog.status()
    }

    pub fn detail(&self) -> &DetailFetcher {
        &self.detail
    }

    /// Rebuild the displayed list from the canonical list and current parameters.
    pub fn recompute(&mut self) {
        self.displayed = derive_displayed(self.catalog.movies(), &self.params);
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.params.search_term = term.to_string();
        self.recompute();
    }

    pub fn set_sort_option(&mut self, option: SortOption) {
        self.params.sort_option = option;
        self.recompute();
    }

    /// Re-run the acquisition and rebuild the displayed list.
    pub async fn refresh(&mut self, source: &dyn MovieSource, page_count: u32) -> Result<()> {
        let result = self.catalog.refresh(source, page_count).await;
        self.recompute();
        result
    }

    /// Load the detail for a movie.
    pub async fn open(&mut self, source: &dyn MovieSource, movie_id: u64) -> &FetchStatus {
        self.detail.fetch(source, movie_id).await
    }
}
