use thiserror::Error;

/// Product-level error taxonomy. Messages are user-facing; each
/// analysis failure category keeps its own variant so the panel can
/// show a distinct message instead of one generic failure.
#[derive(Error, Debug)]
pub enum DesignMuseError {
    #[error("Unknown element type: {0}")]
    UnknownElementType(String),

    /// Provider failure during expansion or a direct search; carries
    /// the adapter's error unchanged.
    #[error(transparent)]
    Fetch(#[from] anyhow::Error),

    #[error("Invalid or missing API key. Check GEMINI_API_KEY in your environment.")]
    AnalysisAuth,

    #[error("API quota exceeded. Please try again later.")]
    AnalysisQuota,

    #[error("Failed to parse AI response. Please try again.")]
    AnalysisParse(String),

    #[error("No text response from the analysis model")]
    AnalysisNoText,

    #[error("Failed to analyze design: {0}")]
    Analysis(String),

    #[error("Invalid file type. Upload a JPEG, PNG, GIF, or WebP image.")]
    UnsupportedImageType(String),

    #[error("File too large. Upload an image under 10MB.")]
    ImageTooLarge(u64),

    #[error("Another gallery page is already loading")]
    LoadInFlight,
}
