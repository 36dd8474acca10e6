//! Raw text extraction from uploaded résumé documents.
//!
//! Decoding happens entirely in memory. Decoder failures are logged and
//! collapse to an empty string; callers decide what "no text" means.

pub mod docx;
pub mod pdf;

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("PDF decode error: {0}")]
    Pdf(String),

    #[error("DOCX container error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("DOCX XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("DOCX document part exceeds {limit} bytes once decompressed")]
    TooLarge { limit: u64 },
}

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Resolves the kind from a filename extension, case-insensitively.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
        }
    }
}

/// An uploaded document. Owned by the upload handler, never mutated.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub kind: DocumentKind,
    pub bytes: Bytes,
}

impl RawDocument {
    pub fn new(kind: DocumentKind, bytes: impl Into<Bytes>) -> Self {
        Self {
            kind,
            bytes: bytes.into(),
        }
    }
}

/// Returns the document's plain text, or an empty string if it cannot be decoded.
pub fn extract_raw_text(document: &RawDocument) -> String {
    let result = match document.kind {
        DocumentKind::Pdf => pdf::extract_text(&document.bytes),
        DocumentKind::Docx => docx::extract_text(&document.bytes),
    };

    match result {
        Ok(text) => {
            debug!(
                "Extracted {} chars from {} document",
                text.chars().count(),
                document.kind.as_str()
            );
            text
        }
        Err(e) => {
            warn!("Error extracting text from {}: {e}", document.kind.as_str());
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_filename() {
        assert_eq!(DocumentKind::from_filename("cv.pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_filename("CV.PDF"), Some(DocumentKind::Pdf));
        assert_eq!(
            DocumentKind::from_filename("my.resume.Docx"),
            Some(DocumentKind::Docx)
        );
        assert_eq!(DocumentKind::from_filename("resume.doc"), None);
        assert_eq!(DocumentKind::from_filename("resume"), None);
        assert_eq!(DocumentKind::from_filename(""), None);
    }

    #[test]
    fn test_undecodable_bytes_yield_empty_text() {
        let pdf = RawDocument::new(DocumentKind::Pdf, b"definitely not a pdf".to_vec());
        assert_eq!(extract_raw_text(&pdf), "");

        let docx = RawDocument::new(DocumentKind::Docx, b"definitely not a zip".to_vec());
        assert_eq!(extract_raw_text(&docx), "");
    }
}
