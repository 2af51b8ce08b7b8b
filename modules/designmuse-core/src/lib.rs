//! Library core of the designmuse panel add-on.
//!
//! Flow: an image goes to the analysis model and comes back as
//! structured suggestions; the orchestrator fans the suggestions out to
//! the search providers and attaches normalized preview items; the
//! gallery pager fetches further pages on demand. The panel UI and
//! canvas insertion live outside this crate — [`types::CanvasAction`]
//! is the contract handed to them.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod gallery;
pub mod normalize;
pub mod orchestrator;
pub mod session;
pub mod traits;
pub mod types;
pub mod upload;

pub use analyzer::DesignAnalyzer;
pub use config::Config;
pub use error::DesignMuseError;
pub use gallery::GalleryPager;
pub use orchestrator::AssetOrchestrator;
pub use session::{AnalysisSession, RunToken};
pub use types::{
    Analysis, AssetSource, CanvasAction, EnrichedSuggestion, ExpandedPage, ItemMetadata,
    MoreAction, OriginalResult, PreviewItem, Suggestion,
};
