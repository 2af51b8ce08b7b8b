//! In-memory provider fakes: no network, no keys, deterministic pages.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::sync::Notify;

use designmuse_core::traits::{AnalysisBackend, GifProvider, PhotoProvider};
use designmuse_core::types::{MoreAction, Suggestion};
use gemini_client::GeminiError;
use tenor_client::{GifObject, SearchPage as GifPage};
use unsplash_client::{Photo, SearchOptions, SearchPage as PhotoPage};

pub fn gif(id: &str) -> GifObject {
    serde_json::from_str(&format!(
        r#"{{
        "id": "{id}",
        "title": "gif {id}",
        "media_formats": {{
            "gif": {{"url": "https://media.tenor.com/{id}.gif"}},
            "tinygif": {{"url": "https://media.tenor.com/{id}-tiny.gif"}}
        }}
    }}"#
    ))
    .expect("invalid gif fixture")
}

pub fn photo(id: &str) -> Photo {
    serde_json::from_str(&format!(
        r#"{{
        "id": "{id}",
        "description": "photo {id}",
        "urls": {{
            "regular": "https://images.unsplash.com/{id}?w=1080",
            "small": "https://images.unsplash.com/{id}?w=400"
        }},
        "user": {{"name": "Test Author", "username": "testauthor"}},
        "links": {{"download_location": "https://api.unsplash.com/photos/{id}/download"}}
    }}"#
    ))
    .expect("invalid photo fixture")
}

pub fn suggestion(element_type: &str, keywords: &[&str]) -> Suggestion {
    Suggestion {
        segment_id: format!("seg_{element_type}"),
        element_type: element_type.to_string(),
        title: format!("Add {element_type}"),
        reason: "test".to_string(),
        search_keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

pub fn more_action(element_type: &str, query: &str) -> MoreAction {
    MoreAction {
        element_type: element_type.to_string(),
        search_query: query.to_string(),
        context_key: format!("{element_type}|{query}"),
    }
}

// ---------------------------------------------------------------------------
// Gif provider fakes
// ---------------------------------------------------------------------------

/// Always returns the same page.
pub struct StaticGifs {
    pub results: Vec<GifObject>,
    pub next: Option<String>,
}

#[async_trait]
impl GifProvider for StaticGifs {
    async fn search(&self, _query: &str, _limit: u32, _pos: Option<&str>) -> Result<GifPage> {
        Ok(GifPage {
            results: self.results.clone(),
            next: self.next.clone(),
        })
    }
}

/// Fails every call.
pub struct FailingGifs;

#[async_trait]
impl GifProvider for FailingGifs {
    async fn search(&self, _query: &str, _limit: u32, _pos: Option<&str>) -> Result<GifPage> {
        Err(anyhow!("Tenor API error (status 429): rate limited"))
    }
}

/// Serves a fixed corpus of `total` gifs, honouring limit and the
/// stringified-offset cursor, like the real provider's `pos`.
pub struct OffsetGifs {
    pub total: usize,
}

#[async_trait]
impl GifProvider for OffsetGifs {
    async fn search(&self, _query: &str, limit: u32, pos: Option<&str>) -> Result<GifPage> {
        let offset: usize = pos.map(|p| p.parse().unwrap_or(0)).unwrap_or(0);
        let end = (offset + limit as usize).min(self.total);
        let results = (offset..end).map(|i| gif(&format!("g{i}"))).collect();
        let next = (end < self.total).then(|| end.to_string());
        Ok(GifPage { results, next })
    }
}

/// Records every call; returns one gif with a live cursor.
pub struct RecordingGifs {
    pub calls: Mutex<Vec<(String, u32, Option<String>)>>,
}

impl RecordingGifs {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl GifProvider for RecordingGifs {
    async fn search(&self, query: &str, limit: u32, pos: Option<&str>) -> Result<GifPage> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), limit, pos.map(String::from)));
        Ok(GifPage {
            results: vec![gif("g1")],
            next: Some("cursor".to_string()),
        })
    }
}

/// Blocks inside `search` until released, so tests can observe an
/// in-flight request deterministically.
pub struct BlockingGifs {
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

#[async_trait]
impl GifProvider for BlockingGifs {
    async fn search(&self, _query: &str, _limit: u32, _pos: Option<&str>) -> Result<GifPage> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(GifPage {
            results: vec![gif("slow")],
            next: None,
        })
    }
}

// ---------------------------------------------------------------------------
// Photo provider fakes
// ---------------------------------------------------------------------------

/// Always returns the same page and page count.
pub struct StaticPhotos {
    pub results: Vec<Photo>,
    pub total_pages: u32,
}

#[async_trait]
impl PhotoProvider for StaticPhotos {
    async fn search(&self, _query: &str, _options: &SearchOptions) -> Result<PhotoPage> {
        Ok(PhotoPage {
            results: self.results.clone(),
            total: self.total_pages * 10,
            total_pages: self.total_pages,
        })
    }

    async fn track_download(&self, _photo: &Photo) {}
}

/// Fails every call.
pub struct FailingPhotos;

#[async_trait]
impl PhotoProvider for FailingPhotos {
    async fn search(&self, _query: &str, _options: &SearchOptions) -> Result<PhotoPage> {
        Err(anyhow!("Unsplash API rate limit exceeded"))
    }

    async fn track_download(&self, _photo: &Photo) {}
}

/// Records every call and every usage ping.
pub struct RecordingPhotos {
    pub calls: Mutex<Vec<(String, SearchOptions)>>,
    pub tracked: Mutex<Vec<String>>,
    pub total_pages: u32,
}

impl RecordingPhotos {
    pub fn new(total_pages: u32) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            tracked: Mutex::new(Vec::new()),
            total_pages,
        })
    }
}

#[async_trait]
impl PhotoProvider for RecordingPhotos {
    async fn search(&self, query: &str, options: &SearchOptions) -> Result<PhotoPage> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), options.clone()));
        Ok(PhotoPage {
            results: vec![photo("p1")],
            total: self.total_pages * 10,
            total_pages: self.total_pages,
        })
    }

    async fn track_download(&self, photo: &Photo) {
        self.tracked.lock().unwrap().push(photo.id.clone());
    }
}

// ---------------------------------------------------------------------------
// Analysis backend fake
// ---------------------------------------------------------------------------

/// Canned model backend: replies with fixed text or a fixed error.
pub struct FakeBackend(Box<dyn Fn() -> std::result::Result<String, GeminiError> + Send + Sync>);

impl FakeBackend {
    pub fn reply(text: &str) -> Self {
        let text = text.to_string();
        Self(Box::new(move || Ok(text.clone())))
    }

    pub fn fail(make: fn() -> GeminiError) -> Self {
        Self(Box::new(move || Err(make())))
    }
}

#[async_trait]
impl AnalysisBackend for FakeBackend {
    async fn generate(
        &self,
        _image: &[u8],
        _mime_type: &str,
        _prompt: &str,
    ) -> std::result::Result<String, GeminiError> {
        (self.0)()
    }
}
