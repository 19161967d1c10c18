use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::documents::ExtractionError;
use crate::render::compiler::CompileError;

/// Shown to the user whenever an uploaded document cannot be turned into a resume.
pub const EXTRACTION_HINT: &str = "Failed to parse resume content. Please ensure the file is not password protected and contains readable text.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Compilation failed: {message}")]
    Compilation { message: String, diagnostics: String },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::UnsupportedFormat(format) => AppError::UnsupportedFormat(format),
            other => AppError::Extraction(other.to_string()),
        }
    }
}

impl From<CompileError> for AppError {
    fn from(err: CompileError) -> Self {
        match err {
            CompileError::Io(e) => AppError::Internal(anyhow::Error::new(e)),
            other => AppError::Compilation {
                message: other.to_string(),
                diagnostics: other.diagnostics().to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            AppError::UnsupportedFormat(format) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FORMAT",
                format!("Only PDF and DOCX files are allowed (got {format})"),
                None,
            ),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone(), None)
            }
            AppError::Extraction(reason) => {
                tracing::warn!("Extraction failed: {reason}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EXTRACTION_FAILED",
                    EXTRACTION_HINT.to_string(),
                    None,
                )
            }
            AppError::Compilation {
                message,
                diagnostics,
            } => {
                tracing::error!("LaTeX compilation error: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "COMPILATION_FAILED",
                    "Failed to compile LaTeX".to_string(),
                    Some(format!("{message}\n{diagnostics}").trim().to_string()),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    None,
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(details) = details {
            error["details"] = json!(details);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
