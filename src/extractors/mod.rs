mod docx;
mod pdf;

use crate::errors::{AppError, AppResult};

/// Supported upload formats, dispatched on the file name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    PlainText,
    Pdf,
    Docx,
}

impl FileKind {
    /// Suffix match is case-sensitive, checked in pdf/docx/txt order.
    pub fn from_file_name(file_name: &str) -> AppResult<Self> {
        if file_name.ends_with(".pdf") {
            Ok(FileKind::Pdf)
        } else if file_name.ends_with(".docx") {
            Ok(FileKind::Docx)
        } else if file_name.ends_with(".txt") {
            Ok(FileKind::PlainText)
        } else {
            Err(AppError::UnsupportedType)
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileKind::PlainText => write!(f, "txt"),
            FileKind::Pdf => write!(f, "pdf"),
            FileKind::Docx => write!(f, "docx"),
        }
    }
}

/// Extracts plain text from raw upload bytes.
///
/// PDF and DOCX sources must yield non-whitespace text; plain text uploads
/// are accepted even when empty. That asymmetry matches the product's
/// current contract and is left as-is.
pub fn extract(file_name: &str, bytes: &[u8]) -> AppResult<String> {
    match FileKind::from_file_name(file_name)? {
        FileKind::Pdf => pdf::extract(bytes),
        FileKind::Docx => docx::extract(bytes),
        FileKind::PlainText => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

/// Shared empty-content gate for the document formats.
fn require_text(kind: FileKind, text: String) -> AppResult<String> {
    if text.trim().is_empty() {
        return Err(AppError::EmptyContent(kind));
    }
    Ok(text)
}
