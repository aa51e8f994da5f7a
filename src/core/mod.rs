//! Core business logic modules.

pub mod acquisition;
pub mod detail;
pub mod query;
pub mod session;
