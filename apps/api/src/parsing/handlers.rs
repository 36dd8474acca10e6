//! Axum route handler for résumé uploads.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::{info, info_span, Instrument, Span};
use uuid::Uuid;

use crate::documents::{DocumentKind, RawDocument};
use crate::errors::AppError;
use crate::parsing::pipeline::{analyze_document, ParseResult};
use crate::state::AppState;

/// Multipart part carrying the document.
const FILE_FIELD: &str = "file";

/// POST /upload
///
/// Accepts a PDF or DOCX in the `file` part and returns the extracted
/// profile with its ATS score and suggestions.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ParseResult>, AppError> {
    let request_id = Uuid::new_v4();
    async move {
        let document = read_document(multipart).await?;
        info!(
            "Received {} upload ({} bytes)",
            document.kind.as_str(),
            document.bytes.len()
        );

        let recognizer = state.recognizer.clone();
        let span = Span::current();
        let result = tokio::task::spawn_blocking(move || {
            let _entered = span.enter();
            analyze_document(&document, recognizer.as_ref())
        })
        .await
        .map_err(|e| anyhow::anyhow!("analysis task failed: {e}"))??;

        Ok::<_, AppError>(Json(result))
    }
    .instrument(info_span!("upload", %request_id))
    .await
}

/// Pulls the `file` part out of the form and validates its filename.
async fn read_document(mut multipart: Multipart) -> Result<RawDocument, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        // A part without a filename is a plain form value, not an upload.
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        if filename.is_empty() {
            return Err(AppError::Validation("No selected file".to_string()));
        }
        let kind = DocumentKind::from_filename(&filename)
            .ok_or_else(|| AppError::Validation("Invalid file type".to_string()))?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        return Ok(RawDocument::new(kind, bytes));
    }

    Err(AppError::Validation("No file part".to_string()))
}
