//! Query parameters for the displayed movie list.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sort applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Keep listing order.
    #[default]
    None,
    /// Title (A-Z).
    TitleAsc,
    /// Title (Z-A).
    TitleDesc,
    /// Release date (oldest first).
    DateAsc,
    /// Release date (newest first).
    DateDesc,
}

impl SortOption {
    /// Human label used by the listing header.
    pub fn label(&self) -> &'static str {
        match self {
            SortOption::None => "-- Sort --",
            SortOption::TitleAsc => "Title (A-Z)",
            SortOption::TitleDesc => "Title (Z-A)",
            SortOption::DateAsc => "Release Date (Oldest)",
            SortOption::DateDesc => "Release Date (Newest)",
        }
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOption::None => write!(f, "none"),
            SortOption::TitleAsc => write!(f, "title-asc"),
            SortOption::TitleDesc => write!(f, "title-desc"),
            SortOption::DateAsc => write!(f, "date-asc"),
            SortOption::DateDesc => write!(f, "date-desc"),
        }
    }
}

impl FromStr for SortOption {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(SortOption::None),
            "title-asc" => Ok(SortOption::TitleAsc),
            "title-desc" => Ok(SortOption::TitleDesc),
            "date-asc" => Ok(SortOption::DateAsc),
            "date-desc" => Ok(SortOption::DateDesc),
            other => Err(crate::Error::InvalidSortOption(other.to_string())),
        }
    }
}

/// Search and sort settings driving the displayed list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameters {
    /// Case-insensitive title substring; empty keeps everything.
    pub search_term: String,
    pub sort_option: SortOption,
}

impl QueryParameters {
    pub fn new(search_term: &str, sort_option: SortOption) -> Self {
        Self {
            search_term: search_term.to_string(),
            sort_option,
        }
    }

    /// Sort only, no search.
    pub fn sorted(sort_option: SortOption) -> Self {
        Self::new("", sort_option)
    }

    /// Search only, no sort.
    pub fn search(search_term: &str) -> Self {
        Self::new(search_term, SortOption::None)
    }
}
