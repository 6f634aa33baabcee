//! Error types shared by the admin domain.
//!
//! `FetchError` is stored inside controller state and cloned into UI
//! snapshots, so it carries rendered messages rather than source errors.

/// Failure of a single record fetch
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to decode response: {0}")]
    Decode(String),
    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// Whether the backend rejected the session, so the screen should send
    /// the user back to the login page rather than offer a retry.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, FetchError::Status { status: 401, .. })
    }
}

impl From<anyhow::Error> for FetchError {
    fn from(err: anyhow::Error) -> Self {
        FetchError::Other(format!("{err:#}"))
    }
}

impl From<String> for FetchError {
    fn from(message: String) -> Self {
        FetchError::Other(message)
    }
}

impl From<&str> for FetchError {
    fn from(message: &str) -> Self {
        FetchError::Other(message.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Page size must be at least 1")]
    ZeroPageSize,
    #[error("API base URL cannot be empty")]
    EmptyBaseUrl,
    #[error("Session storage key cannot be empty")]
    EmptyStorageKey,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session storage unavailable: {0}")]
    Storage(String),
    #[error("Failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}
