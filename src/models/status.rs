//! Fetch status shared by the listing and the detail view.

/// Lifecycle of one fetch: `Idle -> Loading -> {Ready, Failed}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    /// User-facing error message.
    Failed(String),
}

impl FetchStatus {
    /// Error message, if the last fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}
