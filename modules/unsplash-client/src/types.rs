use serde::{Deserialize, Serialize};

/// One page of Unsplash search results.
#[derive(Debug, Clone)]
pub struct SearchPage {
    pub results: Vec<Photo>,
    pub total: u32,
    /// Unsplash's own page count for the query at the requested page
    /// size. The pagination contract: more pages exist while the
    /// current page number is below this.
    pub total_pages: u32,
}

/// Raw wire shape of `GET /search/photos`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Photo>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub total_pages: u32,
}

/// A single photo from the Unsplash dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alt_description: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub urls: Option<PhotoUrls>,
    #[serde(default)]
    pub user: Option<PhotoUser>,
    #[serde(default)]
    pub links: Option<PhotoLinks>,
}

/// Per-size URL variants of one photo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhotoUrls {
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub full: Option<String>,
    #[serde(default)]
    pub regular: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoLinks {
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub download: Option<String>,
    /// Endpoint to ping when the photo is actually used, per Unsplash
    /// API guidelines.
    #[serde(default)]
    pub download_location: Option<String>,
}

/// Requested size for [`Photo::image_url`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    Raw,
    Full,
    Regular,
    Small,
    Thumb,
}

/// Fallback order when a requested size is absent.
const SIZE_PRIORITY: [ImageSize; 5] = [
    ImageSize::Regular,
    ImageSize::Small,
    ImageSize::Full,
    ImageSize::Thumb,
    ImageSize::Raw,
];

impl Photo {
    fn url_for(&self, size: ImageSize) -> Option<&String> {
        let urls = self.urls.as_ref()?;
        match size {
            ImageSize::Raw => urls.raw.as_ref(),
            ImageSize::Full => urls.full.as_ref(),
            ImageSize::Regular => urls.regular.as_ref(),
            ImageSize::Small => urls.small.as_ref(),
            ImageSize::Thumb => urls.thumb.as_ref(),
        }
    }

    /// URL for the requested size, falling back through
    /// regular → small → full → thumb → raw when it is absent.
    pub fn image_url(&self, size: ImageSize) -> Option<String> {
        if let Some(url) = self.url_for(size) {
            return Some(url.clone());
        }
        SIZE_PRIORITY
            .iter()
            .find_map(|s| self.url_for(*s))
            .cloned()
    }

    /// Thumbnail for gallery display: small, else thumb, else regular.
    pub fn preview_url(&self) -> Option<String> {
        let urls = self.urls.as_ref()?;
        urls.small
            .as_ref()
            .or(urls.thumb.as_ref())
            .or(urls.regular.as_ref())
            .cloned()
    }

    /// Display text: description, else alt text.
    pub fn display_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .or(self.alt_description.as_deref())
    }
}
