//! Text and JSON output generators.

pub mod detail;
pub mod listing;
