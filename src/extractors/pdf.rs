use super::{require_text, FileKind};
use crate::errors::{AppError, AppResult};

/// Full-document text extraction. A PDF that parses but carries no text
/// layer (scanned or image-only) is reported as empty content rather than
/// a parse failure.
pub fn extract(bytes: &[u8]) -> AppResult<String> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::ExtractionFailed(FileKind::Pdf, e.to_string()))?;

    require_text(FileKind::Pdf, text)
}
