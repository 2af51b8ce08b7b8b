pub mod error;
pub mod types;

pub use error::{Result, TenorError};
pub use types::{GifObject, MediaFormat, MediaFormats, SearchPage};

use tracing::debug;

const BASE_URL: &str = "https://tenor.googleapis.com/v2";

/// Client tag sent with every request, per Tenor's API guidelines.
const CLIENT_KEY: &str = "designmuse_addon";

/// Formats requested from Tenor. Keeps responses small; only formats
/// the preview and insertion paths can actually use.
const MEDIA_FILTER: &str = "gif,tinygif,mp4";

const MAX_QUERY_LEN: usize = 100;

pub struct TenorClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl TenorClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Search Tenor for GIFs. `limit` is clamped into Tenor's accepted
    /// range [1, 50]; `pos` is the continuation cursor from a previous
    /// page. An empty query or missing key is rejected before any
    /// request goes out.
    pub async fn search(&self, query: &str, limit: u32, pos: Option<&str>) -> Result<SearchPage> {
        let cleaned = clean_query(query);
        if cleaned.is_empty() {
            return Err(TenorError::EmptyQuery);
        }
        if self.api_key.is_empty() {
            return Err(TenorError::MissingKey);
        }

        let limit = limit.clamp(1, 50);
        debug!(query = %cleaned, limit, pos, "Tenor search");

        let mut params = vec![
            ("q", cleaned),
            ("key", self.api_key.clone()),
            ("client_key", CLIENT_KEY.to_string()),
            ("limit", limit.to_string()),
            ("media_filter", MEDIA_FILTER.to_string()),
            ("contentfilter", "medium".to_string()),
            ("locale", "en_US".to_string()),
        ];
        if let Some(pos) = pos {
            params.push(("pos", pos.to_string()));
        }

        let url = format!("{}/search", self.base_url);
        let resp = self.client.get(&url).query(&params).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(TenorError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let page: types::SearchResponse = resp.json().await?;
        Ok(SearchPage {
            results: page.results,
            next: page.next.filter(|n| !n.is_empty()),
        })
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
