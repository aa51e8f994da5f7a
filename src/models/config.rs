//! Configuration model.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the TMDB bearer token.
pub const TOKEN_ENV_VAR: &str = "TMDB_BEARER_TOKEN";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TMDB configuration.
    pub tmdb: TmdbConfig,
    /// Image CDN configuration.
    pub images: ImageConfig,
    /// Upcoming listing configuration.
    pub upcoming: UpcomingConfig,
}

/// TMDB configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TmdbConfig {
    /// Bearer token (v4 read access token), with or without the "Bearer " prefix.
    pub bearer_token: Option<String>,
    /// Language for responses.
    pub language: String,
    /// API base URL.
    pub base_url: String,
}

/// Image CDN configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Base URL for posters and logos.
    pub poster_base_url: String,
    /// Base URL for backdrops.
    pub backdrop_base_url: String,
}

/// Upcoming listing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpcomingConfig {
    /// Number of pages fetched up front.
    pub pages: u32,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            bearer_token: None,
            language: "en-US".to_string(),
            base_url: "https://api.themoviedb.org/3".to_string(),
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            poster_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
            backdrop_base_url: "https://image.tmdb.org/t/p/w780".to_string(),
        }
    }
}

impl Default for UpcomingConfig {
    fn default() -> Self {
        Self { pages: 5 }
    }
}

impl TmdbConfig {
    /// The configured token, treating an empty string as absent.
    pub fn token(&self) -> Option<&str> {
        self.bearer_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

impl Config {
    /// Apply environment overrides on top of file values.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            if !token.trim().is_empty() {
                self.tmdb.bearer_token = Some(token);
            }
        }
        self
    }

    fn validate(self) -> Result<Self> {
        if self.upcoming.pages == 0 {
            return Err(crate::Error::Config(
                "upcoming.pages must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Get the configuration directory path.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("release_radar")
}

/// Load configuration from the default location, then apply environment overrides.
pub fn load_config() -> Result<Config> {
    let config_path = config_dir().join("config.toml");
    Ok(load_config_from(&config_path)?.with_env_overrides())
}

/// Load configuration from a file. A missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!("No config file at {}, using defaults", path.display());
        return Config::default().validate();
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)
        .map_err(|e| crate::Error::Config(format!("{}: {}", path.display(), e)))?;
    config.validate()
}
