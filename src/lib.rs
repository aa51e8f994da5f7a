//! Release Radar Library
//!
//! Fetches upcoming movies from TMDB, searches and sorts them locally, and
//! renders single movie records.

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;
pub mod preflight;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
