//! Error types for page sources.

use fundcat_model::ModelError;
use thiserror::Error;

/// Errors that can occur while fetching a page.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("catalog API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// Response or bundled data was not the expected JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// The configured API base URL cannot be used.
    #[error("invalid API URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// No bundled records exist for a catalog.
    #[error("no bundled data for catalog: {0}")]
    MissingDataset(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl SourceError {
    /// Returns a short message suitable for showing next to the results.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => "Could not reach the catalog. Please check your connection.",
            Self::Status { status, .. } if *status >= 500 => {
                "The catalog is temporarily unavailable. Please try again."
            }
            Self::Status { .. } => "The catalog rejected the request.",
            Self::InvalidUrl { .. } => "The catalog address in your settings is not valid.",
            Self::JsonParse(_) | Self::MissingDataset(_) | Self::Model(_) => {
                "An unexpected error occurred."
            }
        }
    }

    /// Returns whether repeating the same request might succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

/// Result type alias for page source operations.
pub type Result<T> = std::result::Result<T, SourceError>;
