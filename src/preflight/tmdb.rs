//! TMDB API preflight checks.

use super::CheckResult;
use crate::models::config::{TmdbConfig, TOKEN_ENV_VAR};
use crate::services::tmdb::TmdbClient;

/// Check that a bearer token is configured.
pub fn check_credential(config: &TmdbConfig) -> CheckResult {
    if config.token().is_some() {
        CheckResult::ok("TMDB token", "configured")
    } else {
        CheckResult::fail(
            "TMDB token",
            "not configured",
            &crate::Error::MissingCredential.to_string(),
        )
    }
}

/// Check that TMDB accepts the token.
pub async fn check_connectivity(config: &TmdbConfig) -> CheckResult {
    let client = TmdbClient::new(config.clone());
    match client.verify_credential().await {
        Ok(true) => CheckResult::ok("TMDB API", "connected"),
        Ok(false) => CheckResult::fail(
            "TMDB API",
            "token rejected",
            &format!("Check your {} environment variable", TOKEN_ENV_VAR),
        ),
        Err(e) => CheckResult::fail(
            "TMDB API",
            &format!("connection failed ({})", e),
            "Check your network connection",
        ),
    }
}
