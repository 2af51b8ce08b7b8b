use serde::{Deserialize, Serialize};

/// One page of Tenor search results.
#[derive(Debug, Clone)]
pub struct SearchPage {
    pub results: Vec<GifObject>,
    /// Continuation cursor for the next page. `None` when Tenor has no
    /// further results.
    pub next: Option<String>,
}

impl SearchPage {
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }
}

/// Raw wire shape of `GET /search`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Vec<GifObject>,
    #[serde(default)]
    pub next: Option<String>,
}

/// A single GIF result from the Tenor dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GifObject {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub media_formats: MediaFormats,
    #[serde(default, rename = "hasaudio")]
    pub has_audio: bool,
}

/// Media variants Tenor returns for one GIF. Only the formats named in
/// the request's `media_filter` show up here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaFormats {
    #[serde(default)]
    pub gif: Option<MediaFormat>,
    #[serde(default)]
    pub tinygif: Option<MediaFormat>,
    #[serde(default)]
    pub mp4: Option<MediaFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaFormat {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub dims: Vec<u32>,
    #[serde(default)]
    pub size: Option<u64>,
}

impl GifObject {
    /// Smallest variant, for gallery previews: `tinygif`, else `gif`.
    pub fn preview_url(&self) -> Option<String> {
        self.media_formats
            .tinygif
            .as_ref()
            .and_then(|f| f.url.clone())
            .or_else(|| self.media_formats.gif.as_ref().and_then(|f| f.url.clone()))
    }

    /// Insertable variant: `gif`, else `tinygif`. Canvas insertion only
    /// accepts GIF data, so `mp4` is never used even when present.
    pub fn gif_url(&self) -> Option<String> {
        self.media_formats
            .gif
            .as_ref()
            .and_then(|f| f.url.clone())
            .or_else(|| {
                self.media_formats
                    .tinygif
                    .as_ref()
                    .and_then(|f| f.url.clone())
            })
    }
}
