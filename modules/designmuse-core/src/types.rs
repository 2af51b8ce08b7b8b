use serde::{Deserialize, Serialize};

use tenor_client::GifObject;
use unsplash_client::Photo;

/// Element categories the analysis model may suggest. `element_type`
/// stays a plain string on [`Suggestion`] so values outside this set
/// survive to the orchestrator, which degrades them to empty results
/// instead of failing.
pub const VALID_ELEMENT_TYPES: &[&str] =
    &["background", "gifs", "memes", "illustrations", "images"];

/// A single improvement suggestion from the analysis model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub segment_id: String,
    pub element_type: String,
    pub title: String,
    pub reason: String,
    pub search_keywords: Vec<String>,
}

impl Suggestion {
    /// Query used for asset searches: the first two keywords joined by
    /// a space.
    pub fn search_query(&self) -> String {
        self.search_keywords
            .iter()
            .take(2)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The full analysis reply, after validation and per-entry filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub analysis_summary: String,
    pub suggestions: Vec<Suggestion>,
}

/// Which provider a preview item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetSource {
    Tenor,
    Unsplash,
}

/// Insertion descriptor handed to the canvas collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasAction {
    pub kind: ActionKind,
    /// Provider-native asset id, without the preview-item prefix.
    pub asset_id: String,
    pub source: AssetSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    AddGif,
    AddMeme,
    AddBackground,
    AddImage,
}

/// Provider-specific descriptive fields for one preview item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemMetadata {
    Gif {
        id: String,
        title: String,
        has_audio: bool,
    },
    Photo {
        id: String,
        description: String,
        author: String,
        author_username: String,
        width: Option<u32>,
        height: Option<u32>,
        color: Option<String>,
        download_url: Option<String>,
        html_url: Option<String>,
    },
}

/// Cloned provider-native payload. The only place a native result
/// shape crosses the normalizer boundary; kept because usage reporting
/// and URL reconstruction need the original object, not derived fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OriginalResult {
    Tenor(GifObject),
    Unsplash(Photo),
}

/// Normalized, provider-agnostic search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewItem {
    /// Provider-prefixed, unique across providers within a result set.
    pub id: String,
    pub source: AssetSource,
    /// Smallest/fastest media variant; absent when the provider
    /// returned no usable preview. The UI degrades to a placeholder.
    pub preview_url: Option<String>,
    /// Full-resolution variant in the one format canvas insertion
    /// accepts; independently nullable.
    pub full_url: Option<String>,
    pub metadata: ItemMetadata,
    pub action: CanvasAction,
    pub original: OriginalResult,
}

/// Hook for fetching further pages of a suggestion's results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoreAction {
    pub element_type: String,
    /// Query resolved at enrichment; expansion reuses it verbatim so
    /// "load more" stays consistent with the initial previews.
    pub search_query: String,
    pub context_key: String,
}

/// A suggestion plus whatever the asset fan-out produced for it.
/// Exactly one of `preview_items` (possibly empty) or `fetch_error` is
/// meaningful at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedSuggestion {
    #[serde(flatten)]
    pub suggestion: Suggestion,
    pub preview_items: Vec<PreviewItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_action: Option<MoreAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_error: Option<String>,
}

/// One page of expanded-gallery results.
#[derive(Debug, Clone)]
pub struct ExpandedPage {
    pub results: Vec<PreviewItem>,
    pub has_more: bool,
    /// Always the requested page plus one, regardless of provider.
    pub next_page: u32,
}
