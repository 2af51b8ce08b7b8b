use thiserror::Error;

pub type Result<T> = std::result::Result<T, UnsplashError>;

#[derive(Debug, Error)]
pub enum UnsplashError {
    #[error("Unsplash API key is not configured")]
    MissingKey,

    #[error("Search query cannot be empty")]
    EmptyQuery,

    #[error("Invalid Unsplash API key")]
    InvalidKey,

    #[error("Unsplash API rate limit exceeded")]
    RateLimited,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unsplash API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for UnsplashError {
    fn from(err: reqwest::Error) -> Self {
        UnsplashError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for UnsplashError {
    fn from(err: serde_json::Error) -> Self {
        UnsplashError::Parse(err.to_string())
    }
}
