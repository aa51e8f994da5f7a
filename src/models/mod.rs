//! Data models.

pub mod config;
pub mod movie;
pub mod query;
pub mod status;

pub use movie::{MovieDetail, MovieSummary, UpcomingPage};
pub use query::{QueryParameters, SortOption};
pub use status::FetchStatus;
