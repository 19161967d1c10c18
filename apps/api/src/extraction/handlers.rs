use axum::{extract::Multipart, Json};
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::extraction::documents::{extract_document_text, DocumentFormat};
use crate::extraction::extract_resume;
use crate::models::resume::ResumeRecord;

/// Multipart field carrying the uploaded document.
pub const UPLOAD_FIELD: &str = "resume";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResumeResponse {
    pub success: bool,
    pub message: String,
    pub resume_data: ResumeRecord,
}

/// POST /api/parse-resume
/// Accepts a PDF or DOCX upload in the `resume` field and returns the
/// structured resume extracted from it.
pub async fn handle_parse_resume(
    mut multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            debug!("Skipping multipart field {:?}", field.name());
            continue;
        }

        let file_name = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let format = DocumentFormat::detect(content_type.as_deref(), file_name.as_deref())?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?;
        info!(
            "Parsing {:?} upload {} ({} bytes)",
            format,
            file_name.as_deref().unwrap_or("<unnamed>"),
            bytes.len()
        );

        let text = extract_document_text(format, bytes).await?;
        let resume_data = extract_resume(&text)?;

        return Ok(Json(ParseResumeResponse {
            success: true,
            message: "Resume parsed successfully".to_string(),
            resume_data,
        }));
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}
