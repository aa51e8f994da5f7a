//! TMDB API client.

use super::MovieSource;
use crate::models::config::TmdbConfig;
use crate::models::{MovieDetail, UpcomingPage};
use crate::Result;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;

const BEARER_PREFIX: &str = "Bearer ";

/// TMDB API client.
pub struct TmdbClient {
    config: TmdbConfig,
    client: reqwest::Client,
}

/// Build the Authorization header value, adding the scheme only when missing.
pub fn authorization_header(token: &str) -> String {
    if token.starts_with(BEARER_PREFIX) {
        token.to_string()
    } else {
        format!("{}{}", BEARER_PREFIX, token)
    }
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(config: TmdbConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn authorization(&self) -> Result<String> {
        self.config
            .token()
            .map(authorization_header)
            .ok_or(crate::Error::MissingCredential)
    }

    /// URL of one page of the upcoming listing.
    pub fn upcoming_url(&self, page: u32) -> String {
        format!(
            "{}/movie/upcoming?language={}&page={}",
            self.base_url(),
            self.config.language,
            page
        )
    }

    /// URL of a single movie record.
    pub fn detail_url(&self, movie_id: u64) -> String {
        format!(
            "{}/movie/{}?language={}",
            self.base_url(),
            movie_id,
            self.config.language
        )
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// GET a JSON document. The credential is checked before anything goes on the wire.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let authorization = self.authorization()?;

        tracing::debug!("GET {}", url);
        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, authorization)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!("TMDB responded {} for {}", status, url);
            return Err(crate::Error::RequestFailed {
                status: status.as_u16(),
            });
        }

        Ok(resp.json().await?)
    }

    /// Verify the token is accepted.
    pub async fn verify_credential(&self) -> Result<bool> {
        let url = format!("{}/authentication", self.base_url());
        credential_verdict(self.get_json::<serde_json::Value>(&url).await)
    }
}

/// Only 401 and 403 mean the token was rejected; any other failure is a
/// connectivity problem and propagates.
fn credential_verdict(result: Result<serde_json::Value>) -> Result<bool> {
    match result {
        Ok(_) => Ok(true),
        Err(crate::Error::RequestFailed { status: 401 | 403 }) => Ok(false),
        Err(e) => Err(e),
    }
}

#[async_trait]
impl MovieSource for TmdbClient {
    async fn upcoming_page(&self, page: u32) -> Result<UpcomingPage> {
        let url = self.upcoming_url(page);
        self.get_json(&url).await
    }

    async fn movie_detail(&self, movie_id: u64) -> Result<MovieDetail> {
        let url = self.detail_url(movie_id);
        self.get_json(&url).await
    }
}
