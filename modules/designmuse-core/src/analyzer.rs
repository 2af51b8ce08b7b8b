//! Image analysis: one model call, validated JSON out.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use gemini_client::util::strip_code_fence;
use gemini_client::{GeminiClient, GeminiError};

use crate::config::Config;
use crate::error::DesignMuseError;
use crate::traits::AnalysisBackend;
use crate::types::{Analysis, Suggestion, VALID_ELEMENT_TYPES};

/// Instruction prompt sent with every analysis image. The model must
/// reply with bare JSON matching [`Analysis`].
const ANALYSIS_PROMPT: &str = r#"Analyze this design/image and suggest visual elements that would improve it.

Return ONLY valid JSON (no prose, no markdown fences) in this exact format:
{
  "analysis_summary": "One or two sentences describing the design and its biggest opportunity.",
  "suggestions": [
    {
      "segment_id": "unique_id_1",
      "element_type": "background | gifs | memes | illustrations | images",
      "title": "Short suggestion title",
      "reason": "Why this element would improve the design",
      "search_keywords": ["keyword1", "keyword2", "keyword3"]
    }
  ]
}

Rules:
- element_type must be exactly one of: background, gifs, memes, illustrations, images.
- Provide 2 to 5 suggestions, ordered by impact (most impactful first).
- search_keywords must contain 2 to 4 short search terms."#;

/// Raw reply shape before per-entry validation. Suggestions stay loose
/// JSON here so one malformed entry cannot poison the batch.
#[derive(Debug, Deserialize)]
struct RawAnalysis {
    analysis_summary: String,
    suggestions: Vec<serde_json::Value>,
}

pub struct DesignAnalyzer {
    backend: Arc<dyn AnalysisBackend>,
}

impl DesignAnalyzer {
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self { backend }
    }

    /// Wire up the real model client from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(GeminiClient::new(config.gemini_api_key.clone())))
    }

    /// Analyze an image and return its summary plus validated
    /// suggestions.
    pub async fn analyze(
        &self,
        image: &[u8],
        mime_type: &str,
    ) -> Result<Analysis, DesignMuseError> {
        let reply = self
            .backend
            .generate(image, mime_type, ANALYSIS_PROMPT)
            .await
            .map_err(map_backend_error)?;

        parse_analysis(&reply)
    }
}

/// Map provider failures onto the user-facing error categories.
fn map_backend_error(err: GeminiError) -> DesignMuseError {
    match err {
        GeminiError::MissingKey | GeminiError::Auth(_) => DesignMuseError::AnalysisAuth,
        GeminiError::Quota(_) => DesignMuseError::AnalysisQuota,
        GeminiError::NoText => DesignMuseError::AnalysisNoText,
        other => DesignMuseError::Analysis(other.to_string()),
    }
}

/// Parse and validate a raw model reply: strip an optional code fence,
/// require the top-level fields, and keep only suggestions whose
/// `element_type` is known and whose required fields are all present.
/// Zero surviving suggestions is a valid outcome, not an error.
pub fn parse_analysis(reply: &str) -> Result<Analysis, DesignMuseError> {
    let json = strip_code_fence(reply);

    let raw: RawAnalysis =
        serde_json::from_str(json).map_err(|e| DesignMuseError::AnalysisParse(e.to_string()))?;

    let mut suggestions = Vec::new();
    for value in raw.suggestions {
        match serde_json::from_value::<Suggestion>(value) {
            Ok(s) if VALID_ELEMENT_TYPES.contains(&s.element_type.as_str()) => {
                suggestions.push(s);
            }
            Ok(s) => {
                warn!(element_type = %s.element_type, "Dropping suggestion with unknown element type");
            }
            Err(err) => {
                warn!(error = %err, "Dropping malformed suggestion");
            }
        }
    }

    debug!(count = suggestions.len(), "Parsed analysis suggestions");

    Ok(Analysis {
        analysis_summary: raw.analysis_summary,
        suggestions,
    })
}
