//! Axum route handlers for the application history CRUD surface.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::applications::store::{
    delete_application, get_application, list_applications, update_status,
};
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::application::{ApplicationStatus, GenerationResult, JobApplicationRow};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: ApplicationStatus,
}

#[derive(Debug, Serialize)]
pub struct ApplicationDetailResponse {
    pub application: JobApplicationRow,
    /// Rehydrated result view for read-only replay of a history entry.
    pub result: GenerationResult,
}

/// GET /api/v1/applications
///
/// The caller's full history, newest first.
pub async fn handle_list_applications(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<JobApplicationRow>>, AppError> {
    let applications = list_applications(&state.db, user.user_id).await?;
    Ok(Json(applications))
}

/// GET /api/v1/applications/:id
///
/// One stored application plus its result view. Viewing history never
/// re-invokes generation.
pub async fn handle_get_application(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApplicationDetailResponse>, AppError> {
    let application = get_application(&state.db, user.user_id, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;

    let result = GenerationResult::from(&application);

    Ok(Json(ApplicationDetailResponse {
        application,
        result,
    }))
}

/// PATCH /api/v1/applications/:id/status
///
/// Unconditional overwrite; idempotent. 404 when the record is not the
/// caller's own.
pub async fn handle_update_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<StatusUpdateRequest>,
) -> Result<Json<JobApplicationRow>, AppError> {
    let updated = update_status(&state.db, user.user_id, id, request.status)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;

    Ok(Json(updated))
}

/// DELETE /api/v1/applications/:id
///
/// Removes the record; not recoverable. The resume blob is untouched.
pub async fn handle_delete_application(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = delete_application(&state.db, user.user_id, id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Application {id} not found")));
    }

    Ok(StatusCode::NO_CONTENT)
}
