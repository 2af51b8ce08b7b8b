// Trait seams over the provider clients.
//
// GifProvider / PhotoProvider / AnalysisBackend decouple the
// orchestrator and analyzer from the concrete HTTP clients, so tests
// run against in-memory fakes: no network, no keys.

use anyhow::Result;
use async_trait::async_trait;

use gemini_client::{GeminiClient, GeminiError};
use tenor_client::{SearchPage as GifPage, TenorClient};
use unsplash_client::{Photo, SearchOptions, SearchPage as PhotoPage, UnsplashClient};

#[async_trait]
pub trait GifProvider: Send + Sync {
    /// Search GIFs; `pos` is the provider's continuation cursor.
    async fn search(&self, query: &str, limit: u32, pos: Option<&str>) -> Result<GifPage>;
}

#[async_trait]
pub trait PhotoProvider: Send + Sync {
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<PhotoPage>;

    /// Best-effort usage report; implementations must not fail.
    async fn track_download(&self, photo: &Photo);
}

#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Send an image and prompt, return the model's raw text reply.
    /// Keeps the provider's typed error so the analyzer can map it onto
    /// user-facing categories.
    async fn generate(
        &self,
        image: &[u8],
        mime_type: &str,
        prompt: &str,
    ) -> std::result::Result<String, GeminiError>;
}

#[async_trait]
impl GifProvider for TenorClient {
    async fn search(&self, query: &str, limit: u32, pos: Option<&str>) -> Result<GifPage> {
        Ok(TenorClient::search(self, query, limit, pos).await?)
    }
}

#[async_trait]
impl PhotoProvider for UnsplashClient {
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<PhotoPage> {
        Ok(UnsplashClient::search(self, query, options).await?)
    }

    async fn track_download(&self, photo: &Photo) {
        UnsplashClient::track_download(self, photo).await;
    }
}

#[async_trait]
impl AnalysisBackend for GeminiClient {
    async fn generate(
        &self,
        image: &[u8],
        mime_type: &str,
        prompt: &str,
    ) -> std::result::Result<String, GeminiError> {
        self.generate_with_image(image, mime_type, prompt).await
    }
}
