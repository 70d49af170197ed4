use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use super::{require_text, FileKind};
use crate::errors::{AppError, AppResult};

/// Raw paragraph text extraction, one line per paragraph. Tables, headers
/// and other non-paragraph content are ignored.
pub fn extract(bytes: &[u8]) -> AppResult<String> {
    let docx = read_docx(bytes)
        .map_err(|e| AppError::ExtractionFailed(FileKind::Docx, e.to_string()))?;

    let mut text = String::new();
    for child in docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            for paragraph_child in paragraph.children {
                if let ParagraphChild::Run(run) = paragraph_child {
                    for run_child in run.children {
                        if let RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }

    require_text(FileKind::Docx, text)
}
