//! Axum route handler for the generation endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::generation::generator::{generate_application, GenerateRequest};
use crate::models::application::{GenerationResult, JobApplicationRow};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub application: JobApplicationRow,
    pub result: GenerationResult,
}

/// POST /api/v1/applications/generate
///
/// Builds the prompt, calls the hosted model, persists the outcome with
/// status 'generated', and returns both the record and the result view.
/// The UI disables submission until all three fields are filled; this guard
/// is the server-side mirror of that rule.
pub async fn handle_generate(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("jobTitle cannot be empty".to_string()));
    }
    if request.company.trim().is_empty() {
        return Err(AppError::Validation("company cannot be empty".to_string()));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription cannot be empty".to_string(),
        ));
    }

    let outcome = generate_application(&state.db, &state.llm, user.user_id, &request).await?;

    Ok(Json(GenerateResponse {
        success: true,
        application: outcome.application,
        result: outcome.result,
    }))
}
