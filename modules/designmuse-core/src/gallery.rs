//! View-owned pagination state for the expanded gallery.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::DesignMuseError;
use crate::orchestrator::AssetOrchestrator;
use crate::types::{ExpandedPage, MoreAction, PreviewItem};

struct PageCursor {
    next_page: u32,
    has_more: bool,
}

/// Pagination cursor for one suggestion's expanded gallery.
///
/// Owns `next_page`/`has_more` exclusively and serializes overlapping
/// load-more calls: a second call while one is in flight gets
/// [`DesignMuseError::LoadInFlight`] instead of interleaving pages.
pub struct GalleryPager {
    orchestrator: Arc<AssetOrchestrator>,
    element_type: String,
    query: String,
    page_size: u32,
    cursor: Mutex<PageCursor>,
    in_flight: AtomicBool,
}

impl GalleryPager {
    /// Start a pager from the `more_action` attached at enrichment, so
    /// every page uses the exact query the previews used.
    pub fn new(orchestrator: Arc<AssetOrchestrator>, more: &MoreAction, page_size: u32) -> Self {
        Self {
            orchestrator,
            element_type: more.element_type.clone(),
            query: more.search_query.clone(),
            page_size,
            cursor: Mutex::new(PageCursor {
                next_page: 1,
                has_more: true,
            }),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn has_more(&self) -> bool {
        self.cursor.lock().expect("pager cursor poisoned").has_more
    }

    pub fn next_page(&self) -> u32 {
        self.cursor.lock().expect("pager cursor poisoned").next_page
    }

    /// Fetch the next page. Advances the cursor only on success, so a
    /// failed load can simply be retried. Returns an empty page once
    /// the provider is exhausted.
    pub async fn load_more(&self) -> Result<Vec<PreviewItem>, DesignMuseError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(DesignMuseError::LoadInFlight);
        }

        let result = self.load_next().await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn load_next(&self) -> Result<Vec<PreviewItem>, DesignMuseError> {
        let (page, has_more) = {
            let cursor = self.cursor.lock().expect("pager cursor poisoned");
            (cursor.next_page, cursor.has_more)
        };
        if !has_more {
            return Ok(Vec::new());
        }

        let ExpandedPage {
            results,
            has_more,
            next_page,
        } = self
            .orchestrator
            .expand(&self.element_type, &self.query, self.page_size, page)
            .await?;

        let mut cursor = self.cursor.lock().expect("pager cursor poisoned");
        cursor.next_page = next_page;
        cursor.has_more = has_more;
        Ok(results)
    }
}
