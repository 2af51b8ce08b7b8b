//! Native provider results → [`PreviewItem`].
//!
//! Pure and total: absent media variants become `None`, never errors.
//! The media preference order lives on the native types
//! ([`GifObject::gif_url`], [`Photo::image_url`]); this module decides
//! ids, actions, and metadata.

use tenor_client::GifObject;
use unsplash_client::{ImageSize, Photo};

use crate::types::{
    ActionKind, AssetSource, CanvasAction, ItemMetadata, OriginalResult, PreviewItem,
};

/// Normalize one Tenor result. `id_prefix` distinguishes suggestion
/// previews (`tenor`) from direct custom searches (`tenor_custom`) so
/// ids never collide across the two flows.
pub fn gif_preview_item(gif: &GifObject, element_type: &str, id_prefix: &str) -> PreviewItem {
    let kind = if element_type == "memes" {
        ActionKind::AddMeme
    } else {
        ActionKind::AddGif
    };

    PreviewItem {
        id: format!("{id_prefix}_{}", gif.id),
        source: AssetSource::Tenor,
        preview_url: gif.preview_url(),
        full_url: gif.gif_url(),
        metadata: ItemMetadata::Gif {
            id: gif.id.clone(),
            title: gif.title.clone().unwrap_or_default(),
            has_audio: gif.has_audio,
        },
        action: CanvasAction {
            kind,
            asset_id: gif.id.clone(),
            source: AssetSource::Tenor,
        },
        original: OriginalResult::Tenor(gif.clone()),
    }
}

/// Normalize one Unsplash result. Only the singular `background`
/// element type inserts as a background; the plural alias inserts as a
/// plain image. Callers depend on that distinction.
pub fn photo_preview_item(photo: &Photo, element_type: &str) -> PreviewItem {
    let kind = if element_type == "background" {
        ActionKind::AddBackground
    } else {
        ActionKind::AddImage
    };

    PreviewItem {
        id: format!("unsplash_{}", photo.id),
        source: AssetSource::Unsplash,
        preview_url: photo.preview_url(),
        full_url: photo.image_url(ImageSize::Regular),
        metadata: ItemMetadata::Photo {
            id: photo.id.clone(),
            description: photo.display_description().unwrap_or_default().to_string(),
            author: photo
                .user
                .as_ref()
                .and_then(|u| u.name.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
            author_username: photo
                .user
                .as_ref()
                .and_then(|u| u.username.clone())
                .unwrap_or_default(),
            width: photo.width,
            height: photo.height,
            color: photo.color.clone(),
            download_url: photo.links.as_ref().and_then(|l| l.download.clone()),
            html_url: photo.links.as_ref().and_then(|l| l.html.clone()),
        },
        action: CanvasAction {
            kind,
            asset_id: photo.id.clone(),
            source: AssetSource::Unsplash,
        },
        original: OriginalResult::Unsplash(photo.clone()),
    }
}
