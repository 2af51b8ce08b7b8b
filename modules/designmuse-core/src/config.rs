use std::env;

/// API credentials loaded from the environment at startup and handed
/// to the client constructors. Request logic never reads the
/// environment directly.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub tenor_api_key: String,
    pub unsplash_access_key: String,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: required_env("GEMINI_API_KEY"),
            tenor_api_key: required_env("TENOR_API_KEY"),
            unsplash_access_key: required_env("UNSPLASH_ACCESS_KEY"),
        }
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
