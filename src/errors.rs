use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::{extractors::FileKind, services::http_helpers::with_cors};

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("invalid file upload")]
    InvalidUpload,

    #[error("unsupported file type")]
    UnsupportedType,

    #[error("no extractable text in {0} document")]
    EmptyContent(FileKind),

    #[error("failed to parse {0} document: {1}")]
    ExtractionFailed(FileKind, String),

    #[error("completion request failed: {0}")]
    Completion(String),

    #[error("completion request timed out")]
    CompletionTimeout,

    #[error("internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Fixed user-facing message; internal detail stays in the log.
    pub fn client_message(&self) -> &'static str {
        match self {
            AppError::InvalidUpload => "Invalid file upload",
            AppError::UnsupportedType => "Unsupported file type",
            AppError::EmptyContent(FileKind::Pdf) => {
                "PDF contains no extractable text (may be scanned or image-based)"
            }
            AppError::EmptyContent(_) => "DOCX file contains no extractable text",
            AppError::ExtractionFailed(FileKind::Pdf, _) => "Failed to parse PDF",
            AppError::ExtractionFailed(_, _) => "Failed to parse DOCX file",
            AppError::Completion(_) | AppError::CompletionTimeout | AppError::Internal(_) => {
                "Failed to process request"
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUpload
            | AppError::UnsupportedType
            | AppError::EmptyContent(_)
            | AppError::ExtractionFailed(_, _) => StatusCode::BAD_REQUEST,
            AppError::Completion(_) | AppError::CompletionTimeout | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("upload request failed: {}", self);
        } else {
            log::warn!("upload request rejected: {}", self);
        }

        let mut builder = HttpResponse::build(self.status_code());
        with_cors(&mut builder);
        builder.json(ErrorResponse {
            error: self.client_message().to_string(),
        })
    }
}

pub type AppResult<T> = Result<T, AppError>;
