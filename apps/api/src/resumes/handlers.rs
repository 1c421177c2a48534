//! Axum route handlers for resume upload and lookup.

use axum::{
    extract::{Multipart, State},
    Json,
};
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::{info, warn};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::resumes::extract::{extract_text, file_extension, is_allowed_extension};
use crate::resumes::store::{insert_resume, latest_resume};
use crate::state::AppState;

/// POST /api/v1/resumes
///
/// Multipart upload (field `file`). The blob lands in S3 under a
/// user-prefixed key, then the metadata row is inserted. Blob upload and
/// row insert are two remote calls; if the insert fails the freshly
/// uploaded blob is deleted again (best effort) so it does not orphan.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<ResumeRow>, AppError> {
    let mut upload: Option<(String, Option<String>, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("file field must carry a filename".to_string()))?;
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        upload = Some((file_name, content_type, data));
        break;
    }

    let (file_name, content_type, data) =
        upload.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;

    let ext = file_extension(&file_name)
        .ok_or_else(|| AppError::Validation("File must have an extension".to_string()))?;
    if !is_allowed_extension(&ext) {
        return Err(AppError::Validation(format!(
            "Unsupported file type '.{ext}' — use PDF, DOCX, or TXT"
        )));
    }

    info!("Uploading file: {file_name}");

    let file_path = format!(
        "{}/{}.{ext}",
        user.user_id,
        chrono::Utc::now().timestamp_millis()
    );

    let content = extract_text(&file_name, content_type.as_deref(), &data);

    state
        .s3
        .put_object()
        .bucket(&state.config.s3_bucket)
        .key(&file_path)
        .body(ByteStream::from(data))
        .send()
        .await
        .map_err(|e| AppError::S3(format!("Upload failed: {e}")))?;

    let resume = match insert_resume(&state.db, user.user_id, &file_name, &file_path, &content).await
    {
        Ok(row) => row,
        Err(e) => {
            // Compensating delete: a failed insert must not leave an orphaned blob.
            if let Err(delete_err) = state
                .s3
                .delete_object()
                .bucket(&state.config.s3_bucket)
                .key(&file_path)
                .send()
                .await
            {
                warn!("Failed to clean up orphaned blob {file_path}: {delete_err}");
            }
            return Err(AppError::Database(e));
        }
    };

    info!("Resume uploaded successfully: {}", resume.id);

    Ok(Json(resume))
}

/// GET /api/v1/resumes/current
///
/// The caller's most recent resume; 404 when none has been uploaded.
pub async fn handle_current_resume(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<ResumeRow>, AppError> {
    let resume = latest_resume(&state.db, user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No resume uploaded".to_string()))?;

    Ok(Json(resume))
}
