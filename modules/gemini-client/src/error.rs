use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeminiError>;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Gemini API key is not configured")]
    MissingKey,

    #[error("Gemini auth error: {0}")]
    Auth(String),

    #[error("Gemini quota exhausted: {0}")]
    Quota(String),

    #[error("No text in Gemini response")]
    NoText,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Gemini API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

impl From<reqwest::Error> for GeminiError {
    fn from(err: reqwest::Error) -> Self {
        GeminiError::Network(err.to_string())
    }
}
