//! Fetch error types.

/// Error type for catalog fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl FetchError {
    /// Classify a transport error from the HTTP client.
    pub fn from_transport(err: reqwest::Error, url: &str) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(url.to_string())
        } else if err.is_connect() {
            FetchError::Connection(err.to_string())
        } else if err.is_decode() {
            FetchError::Deserialization(err.to_string())
        } else {
            FetchError::Request(err.to_string())
        }
    }

    /// Check if the remote answered with 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Http { status: 404, .. })
    }

    /// HTTP status, when the remote answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Deserialization(e.to_string())
    }
}
