use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::render::template::render_document;
use crate::state::AppState;

/// Body of both render endpoints. A missing or partial `resumeData` is filled
/// with defaults and rendered with placeholders.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderRequest {
    pub resume_data: ResumeRecord,
}

#[derive(Debug, Serialize)]
pub struct LatexResponse {
    pub latex: String,
}

/// POST /api/latex
/// Returns the generated LaTeX source without compiling it.
pub async fn handle_latex(Json(body): Json<RenderRequest>) -> Json<LatexResponse> {
    Json(LatexResponse {
        latex: render_document(&body.resume_data),
    })
}

/// POST /api/compile
/// Renders and compiles the resume, streaming back the PDF.
pub async fn handle_compile(
    State(state): State<AppState>,
    Json(body): Json<RenderRequest>,
) -> Result<Response, AppError> {
    let source = render_document(&body.resume_data);
    let pdf = state.typesetter.compile(&source).await?;
    info!("Serving compiled resume ({} bytes)", pdf.len());

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (header::CONTENT_DISPOSITION, "inline; filename=\"resume.pdf\""),
        ],
        pdf,
    )
        .into_response())
}
