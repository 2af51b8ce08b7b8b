use thiserror::Error;

pub type Result<T> = std::result::Result<T, TenorError>;

#[derive(Debug, Error)]
pub enum TenorError {
    #[error("Tenor API key is not configured")]
    MissingKey,

    #[error("Search query cannot be empty")]
    EmptyQuery,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Tenor API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for TenorError {
    fn from(err: reqwest::Error) -> Self {
        TenorError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for TenorError {
    fn from(err: serde_json::Error) -> Self {
        TenorError::Parse(err.to_string())
    }
}
