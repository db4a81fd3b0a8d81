use thiserror::Error;

/// Errors raised by the analysis engine and its input validation.
#[derive(Debug, Error)]
pub enum SeoError {
    /// The URL could not be accepted as an absolute http(s) URL.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The page could not be fetched or read. No partial report is produced.
    #[error("Failed to analyze URL: {0}")]
    Fetch(String),

    #[error("HTTP client initialization error: {0}")]
    HttpClient(String),
}

impl SeoError {
    pub(crate) fn invalid_url(url: &str, reason: impl Into<String>) -> Self {
        SeoError::InvalidUrl {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}
