//! Axum route handlers for the analysis and follow-up API.
//!
//! Extractor rejections are taken as `Result` so malformed requests still
//! answer with the `{"error": ...}` shape.

use axum::{
    extract::{
        multipart::{Field, MultipartError, MultipartRejection},
        rejection::JsonRejection,
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::analysis::extraction::extract_upload;
use crate::analysis::{analyze, AnalysisReport, AnalyzeRequest, FollowupAnswer, FollowupRequest};
use crate::errors::AppError;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume_file";
const JOB_DESCRIPTION_FIELD: &str = "job_description";

/// POST /analyze/upload
///
/// Multipart form with a `resume_file` upload and a `job_description` text field.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut multipart = multipart.map_err(|e| AppError::Validation(e.body_text()))?;
    let limit = state.config.max_upload_bytes;
    let malformed = move |e: MultipartError| multipart_error(e, limit);

    let mut resume_file: Option<(String, Bytes)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(RESUME_FIELD) => resume_file = Some(read_file(field, limit).await?),
            Some(JOB_DESCRIPTION_FIELD) => {
                job_description = Some(field.text().await.map_err(malformed)?)
            }
            _ => {}
        }
    }

    let (filename, bytes) = resume_file
        .ok_or_else(|| AppError::Validation(format!("missing '{RESUME_FIELD}' file field")))?;
    let job_description = job_description
        .ok_or_else(|| AppError::Validation(format!("missing '{JOB_DESCRIPTION_FIELD}' field")))?;

    info!("Analyzing upload '{filename}' ({} bytes)", bytes.len());
    let resume = extract_upload(filename, bytes).await?;

    let report = analyze(&state.scorer, &state.relay, &resume, &job_description).await?;
    Ok(Json(report))
}

/// POST /analyze
///
/// Same analysis for a resume that is already text.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisReport>, AppError> {
    let Json(request) = payload.map_err(|e| json_error(e, state.config.max_upload_bytes))?;

    let report = analyze(
        &state.scorer,
        &state.relay,
        &request.resume,
        &request.job_description,
    )
    .await?;
    Ok(Json(report))
}

/// POST /ask-followup
///
/// Empty `suggestions` are passed through; the model still answers.
pub async fn handle_followup(
    State(state): State<AppState>,
    payload: Result<Json<FollowupRequest>, JsonRejection>,
) -> Result<Json<FollowupAnswer>, AppError> {
    let Json(request) = payload.map_err(|e| json_error(e, state.config.max_upload_bytes))?;

    let answer = state
        .relay
        .answer_followup(&request.suggestions, &request.question)
        .await?;
    Ok(Json(FollowupAnswer { answer }))
}

async fn read_file(field: Field<'_>, limit: usize) -> Result<(String, Bytes), AppError> {
    let filename = field.file_name().unwrap_or_default().to_string();
    let bytes = field
        .bytes()
        .await
        .map_err(|e| multipart_error(e, limit))?;
    Ok((filename, bytes))
}

fn json_error(e: JsonRejection, limit: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge { limit }
    } else {
        AppError::Validation(e.body_text())
    }
}

/// Hitting the body limit surfaces mid-stream as a multipart error with a 413 status.
fn multipart_error(e: MultipartError, limit: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge { limit }
    } else {
        AppError::Validation(format!("malformed multipart body: {}", e.body_text()))
    }
}
