use std::panic;

use super::DocumentError;

/// Extracts the text of every page, concatenated in page order.
pub fn extract_text(bytes: &[u8]) -> Result<String, DocumentError> {
    // pdf-extract panics on some malformed cross-reference tables instead of returning Err.
    match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(DocumentError::Pdf(e.to_string())),
        Err(_) => Err(DocumentError::Pdf("decoder panicked".to_string())),
    }
}
