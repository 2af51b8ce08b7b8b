pub mod error;
pub mod types;

pub use error::{Result, UnsplashError};
pub use types::{ImageSize, Photo, PhotoLinks, PhotoUrls, PhotoUser, SearchPage};

use reqwest::header::AUTHORIZATION;
use tracing::{debug, warn};

const BASE_URL: &str = "https://api.unsplash.com";

const MAX_QUERY_LEN: usize = 100;

/// Orientation filter accepted by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
    Squarish,
}

impl Orientation {
    fn as_str(self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Squarish => "squarish",
        }
    }
}

/// Search parameters beyond the query itself.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Results per page, clamped into Unsplash's accepted range [1, 30].
    pub per_page: u32,
    /// 1-based page number.
    pub page: u32,
    pub orientation: Option<Orientation>,
    pub color: Option<String>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            per_page: 10,
            page: 1,
            orientation: None,
            color: None,
        }
    }
}

pub struct UnsplashClient {
    client: reqwest::Client,
    access_key: String,
    base_url: String,
}

impl UnsplashClient {
    pub fn new(access_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            access_key,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    fn auth_header(&self) -> String {
        format!("Client-ID {}", self.access_key)
    }

    /// Search Unsplash photos. An empty query or missing key is
    /// rejected before any request goes out; out-of-range page sizes
    /// are clamped rather than failed.
    pub async fn search(&self, query: &str, options: &SearchOptions) -> Result<SearchPage> {
        let cleaned = clean_query(query);
        if cleaned.is_empty() {
            return Err(UnsplashError::EmptyQuery);
        }
        if self.access_key.is_empty() {
            return Err(UnsplashError::MissingKey);
        }

        let per_page = options.per_page.clamp(1, 30);
        let page = options.page.max(1);
        debug!(query = %cleaned, per_page, page, "Unsplash search");

        let mut params = vec![
            ("query", cleaned),
            ("per_page", per_page.to_string()),
            ("page", page.to_string()),
        ];
        if let Some(orientation) = options.orientation {
            params.push(("orientation", orientation.as_str().to_string()));
        }
        if let Some(ref color) = options.color {
            params.push(("color", color.clone()));
        }

        let url = format!("{}/search/photos", self.base_url);
        let resp = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.auth_header())
            .query(&params)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                401 => UnsplashError::InvalidKey,
                403 | 429 => UnsplashError::RateLimited,
                code => {
                    let message = resp.text().await.unwrap_or_default();
                    UnsplashError::Api {
                        status: code,
                        message,
                    }
                }
            });
        }

        let body: types::SearchResponse = resp.json().await?;
        Ok(SearchPage {
            results: body.results,
            total: body.total,
            total_pages: body.total_pages,
        })
    }

    /// Report a download to Unsplash, required by its guidelines when a
    /// photo is actually used. Best-effort: failures are logged and
    /// swallowed, never surfaced.
    pub async fn track_download(&self, photo: &Photo) {
        let Some(location) = photo
            .links
            .as_ref()
            .and_then(|l| l.download_location.as_deref())
        else {
            return;
        };

        let result = self
            .client
            .get(location)
            .header(AUTHORIZATION, self.auth_header())
            .send()
            .await;

        match result {
            Ok(resp) if !resp.status().is_success() => {
                warn!(status = %resp.status(), photo = %photo.id, "Unsplash download tracking failed");
            }
            Err(err) => {
                warn!(error = %err, photo = %photo.id, "Unsplash download tracking failed");
            }
            Ok(_) => {}
        }
    }
}

/// Normalize a raw query: trim, collapse whitespace runs to single
/// spaces, cap at 100 characters. Idempotent.
pub fn clean_query(query: &str) -> String {
    let cleaned = query.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.chars().count() <= MAX_QUERY_LEN {
        return cleaned;
    }
    cleaned
        .chars()
        .take(MAX_QUERY_LEN)
        .collect::<String>()
        .trim_end()
        .to_string()
}
