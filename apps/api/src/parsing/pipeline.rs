//! Pipeline: raw text → candidate profile → ATS score → result.
//!
//! Synchronous and single-pass. The text is produced once and every
//! extractor and the scorer read the same borrowed string.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::documents::{extract_raw_text, RawDocument};
use crate::parsing::ats::score;
use crate::parsing::ner::EntityRecognizer;
use crate::parsing::profile::{assemble_profile, CandidateProfile};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// The decoder failed or produced no usable text. No partial profile is returned.
    #[error("no usable text could be extracted from the document")]
    ExtractionFailure,
}

/// Result returned to callers. All keys are always serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    #[serde(flatten)]
    pub profile: CandidateProfile,
    pub score: u8,
    pub suggestions: Vec<String>,
}

pub fn analyze_document(
    document: &RawDocument,
    recognizer: &dyn EntityRecognizer,
) -> Result<ParseResult, PipelineError> {
    let text = extract_raw_text(document);
    analyze_text(&text, recognizer)
}

pub fn analyze_text(
    text: &str,
    recognizer: &dyn EntityRecognizer,
) -> Result<ParseResult, PipelineError> {
    if text.trim().is_empty() {
        warn!("Document produced no usable text");
        return Err(PipelineError::ExtractionFailure);
    }

    let profile = assemble_profile(text, recognizer);
    debug!(
        "Profile fields: name={} email={} phone={} skills={} education={} experience={}",
        profile.name.is_some(),
        profile.email.is_some(),
        profile.phone.is_some(),
        profile.skills.len(),
        profile.education.is_some(),
        profile.experience.is_some()
    );

    let result = score(&profile, text);
    info!(
        "Résumé analysed: score={} suggestions={}",
        result.score,
        result.suggestions.len()
    );

    Ok(ParseResult {
        profile,
        score: result.score,
        suggestions: result.suggestions,
    })
}
