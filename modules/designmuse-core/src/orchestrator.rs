//! Fan-out enrichment and paginated expansion.
//!
//! Suggestions are independent: each resolves its element type to a
//! provider, searches, and normalizes on its own. The fan-out settles
//! every suggestion — a failure becomes that suggestion's
//! `fetch_error`, never the batch's.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{info, warn};

use tenor_client::TenorClient;
use unsplash_client::{Orientation, SearchOptions, UnsplashClient};

use crate::config::Config;
use crate::error::DesignMuseError;
use crate::normalize::{gif_preview_item, photo_preview_item};
use crate::traits::{GifProvider, PhotoProvider};
use crate::types::{EnrichedSuggestion, ExpandedPage, MoreAction, PreviewItem, Suggestion};

/// Search providers a suggestion can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Tenor,
    Unsplash,
}

/// Static element-type → provider mapping. `background` and
/// `backgrounds` are intentional aliases; callers depend on both.
pub fn provider_for(element_type: &str) -> Option<Provider> {
    match element_type {
        "memes" | "gifs" => Some(Provider::Tenor),
        "illustrations" | "backgrounds" | "background" | "images" => Some(Provider::Unsplash),
        _ => None,
    }
}

/// Quality heuristic: bias certain element types with domain words
/// before dispatch. Used identically by enrichment and expansion so
/// "load more" results stay consistent with the initial previews.
pub fn augmented_query(element_type: &str, query: &str) -> String {
    match element_type {
        "memes" => format!("{query} meme"),
        "background" | "backgrounds" => format!("{query} background texture abstract"),
        "illustrations" => format!("{query} illustration art graphic"),
        _ => query.to_string(),
    }
}

fn orientation_for(element_type: &str) -> Option<Orientation> {
    matches!(element_type, "background" | "backgrounds").then_some(Orientation::Landscape)
}

pub struct AssetOrchestrator {
    gifs: Arc<dyn GifProvider>,
    photos: Arc<dyn PhotoProvider>,
}

impl AssetOrchestrator {
    pub fn new(gifs: Arc<dyn GifProvider>, photos: Arc<dyn PhotoProvider>) -> Self {
        Self { gifs, photos }
    }

    /// Wire up the real provider clients from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(TenorClient::new(config.tenor_api_key.clone())),
            Arc::new(UnsplashClient::new(config.unsplash_access_key.clone())),
        )
    }

    /// Attach search results to every suggestion, all concurrently.
    /// Total latency is bounded by the slowest single provider call.
    pub async fn enrich(
        &self,
        suggestions: &[Suggestion],
        preview_limit: u32,
    ) -> Vec<EnrichedSuggestion> {
        let enriched = join_all(
            suggestions
                .iter()
                .map(|s| self.enrich_one(s, preview_limit)),
        )
        .await;

        let failed = enriched.iter().filter(|e| e.fetch_error.is_some()).count();
        info!(count = enriched.len(), failed, "Enriched suggestions");
        enriched
    }

    async fn enrich_one(&self, suggestion: &Suggestion, limit: u32) -> EnrichedSuggestion {
        let element_type = suggestion.element_type.as_str();
        let Some(provider) = provider_for(element_type) else {
            warn!(element_type, "Unknown element type, returning no assets");
            return EnrichedSuggestion {
                suggestion: suggestion.clone(),
                preview_items: Vec::new(),
                more_action: None,
                fetch_error: None,
            };
        };

        let query = suggestion.search_query();

        match self
            .fetch_preview_items(provider, element_type, &query, limit)
            .await
        {
            Ok(preview_items) => EnrichedSuggestion {
                suggestion: suggestion.clone(),
                preview_items,
                more_action: Some(MoreAction {
                    element_type: element_type.to_string(),
                    context_key: format!("{element_type}|{query}"),
                    search_query: query,
                }),
                fetch_error: None,
            },
            Err(err) => {
                warn!(element_type, error = %err, "Asset fetch failed for suggestion");
                EnrichedSuggestion {
                    suggestion: suggestion.clone(),
                    preview_items: Vec::new(),
                    more_action: None,
                    fetch_error: Some(err.to_string()),
                }
            }
        }
    }

    async fn fetch_preview_items(
        &self,
        provider: Provider,
        element_type: &str,
        query: &str,
        limit: u32,
    ) -> anyhow::Result<Vec<PreviewItem>> {
        let augmented = augmented_query(element_type, query);
        match provider {
            Provider::Tenor => {
                let page = self.gifs.search(&augmented, limit, None).await?;
                Ok(page
                    .results
                    .iter()
                    .map(|g| gif_preview_item(g, element_type, "tenor"))
                    .collect())
            }
            Provider::Unsplash => {
                let options = SearchOptions {
                    per_page: limit,
                    page: 1,
                    orientation: orientation_for(element_type),
                    color: None,
                };
                let page = self.photos.search(&augmented, &options).await?;
                Ok(page
                    .results
                    .iter()
                    .map(|p| photo_preview_item(p, element_type))
                    .collect())
            }
        }
    }

    /// Fetch one gallery page past the initial previews. `query` must
    /// be the `more_action.search_query` resolved at enrichment, not a
    /// recomputed one. Provider errors propagate unchanged; nothing is
    /// cached.
    pub async fn expand(
        &self,
        element_type: &str,
        query: &str,
        limit: u32,
        page: u32,
    ) -> Result<ExpandedPage, DesignMuseError> {
        let provider = provider_for(element_type)
            .ok_or_else(|| DesignMuseError::UnknownElementType(element_type.to_string()))?;

        let page = page.max(1);
        let augmented = augmented_query(element_type, query);

        match provider {
            Provider::Tenor => {
                // Tenor paginates by cursor; a page number maps onto a
                // result offset. More results exist exactly when Tenor
                // hands back a continuation token.
                let pos = (page > 1).then(|| ((page - 1) * limit).to_string());
                let gif_page = self
                    .gifs
                    .search(&augmented, limit, pos.as_deref())
                    .await
                    .map_err(DesignMuseError::Fetch)?;
                Ok(ExpandedPage {
                    results: gif_page
                        .results
                        .iter()
                        .map(|g| gif_preview_item(g, element_type, "tenor"))
                        .collect(),
                    has_more: gif_page.next.is_some(),
                    next_page: page + 1,
                })
            }
            Provider::Unsplash => {
                let options = SearchOptions {
                    per_page: limit,
                    page,
                    orientation: orientation_for(element_type),
                    color: None,
                };
                let photo_page = self
                    .photos
                    .search(&augmented, &options)
                    .await
                    .map_err(DesignMuseError::Fetch)?;
                Ok(ExpandedPage {
                    results: photo_page
                        .results
                        .iter()
                        .map(|p| photo_preview_item(p, element_type))
                        .collect(),
                    has_more: page < photo_page.total_pages,
                    next_page: page + 1,
                })
            }
        }
    }

    /// Direct GIF search outside the suggestion flow (the panel's
    /// search box). Ids carry a `tenor_custom` prefix so they never
    /// collide with suggestion previews.
    pub async fn custom_gif_search(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<PreviewItem>, DesignMuseError> {
        let page = self
            .gifs
            .search(query, limit, None)
            .await
            .map_err(DesignMuseError::Fetch)?;
        Ok(page
            .results
            .iter()
            .map(|g| gif_preview_item(g, "gifs", "tenor_custom"))
            .collect())
    }

    /// Report that an asset was actually used. Unsplash requires a
    /// download ping per its usage policy; other sources need nothing.
    /// Never fails.
    pub async fn report_usage(&self, item: &PreviewItem) {
        if let crate::types::OriginalResult::Unsplash(ref photo) = item.original {
            self.photos.track_download(photo).await;
        }
    }
}
