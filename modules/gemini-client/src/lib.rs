pub mod error;
mod types;
pub mod util;

pub use error::{GeminiError, Result};

use base64::Engine;
use tracing::debug;

use types::*;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

pub struct GeminiClient {
    api_key: String,
    model: String,
    http: reqwest::Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            http: reqwest::Client::new(),
            base_url: GEMINI_API_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send an image plus an instruction prompt in one request and
    /// return the model's text reply.
    pub async fn generate_with_image(
        &self,
        image: &[u8],
        mime_type: &str,
        prompt: &str,
    ) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(GeminiError::MissingKey);
        }

        let encoded = base64::engine::general_purpose::STANDARD.encode(image);
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::inline_data(mime_type, encoded), Part::text(prompt)],
            }],
        };

        debug!(
            model = %self.model,
            mime_type,
            image_bytes = image.len(),
            "Gemini generateContent request"
        );

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let resp = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => GeminiError::Auth(message),
                429 => GeminiError::Quota(message),
                400 if message.contains("API_KEY_INVALID") => GeminiError::Auth(message),
                code => GeminiError::Api {
                    status: code,
                    message,
                },
            });
        }

        let body: GenerateContentResponse = resp.json().await?;
        body.text().ok_or(GeminiError::NoText)
    }
}
