//! Error types for release radar.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for release radar.
#[derive(Error, Debug)]
pub enum Error {
    // Acquisition errors
    #[error("Missing TMDB token. Set TMDB_BEARER_TOKEN in your environment.")]
    MissingCredential,

    #[error("TMDB request failed ({status}). Check your token and quota.")]
    RequestFailed { status: u16 },

    #[error("TMDB transport error: {0}")]
    Transport(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    // Query errors
    #[error("Unknown sort option: {0} (expected title-asc, title-desc, date-asc or date-desc)")]
    InvalidSortOption(String),

    // Browse prompt errors
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}

// Connection failures and undecodable bodies both land below the HTTP layer.
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}
