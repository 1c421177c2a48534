//! Application generation — orchestrates the full pipeline.
//!
//! Flow: build prompt → LLM call → parse (with degraded fallback) →
//! INSERT job_applications (status='generated') → return record + result.

use serde::Deserialize;
use sqlx::PgPool;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::applications::store::{insert_application, NewApplication};
use crate::errors::AppError;
use crate::generation::parser::parse_generation_output;
use crate::generation::prompts::{build_prompt, GENERATION_SYSTEM};
use crate::llm_client::LlmClient;
use crate::models::application::{ApplicationStatus, GenerationResult, JobApplicationRow};

/// Request body for application generation. Wire format is camelCase.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub job_title: String,
    pub company: String,
    pub job_description: String,
    /// Empty when the user has no stored resume; switches the prompt into
    /// template-generation mode.
    #[serde(default)]
    pub resume_content: String,
}

/// Outcome of a successful generation: the persisted record and the view
/// handed back to the caller.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub application: JobApplicationRow,
    pub result: GenerationResult,
}

/// Runs one generation request end to end.
///
/// An LLM failure is terminal: surfaced once, never retried. A parse
/// failure is NOT an error; the result degrades to a renderable stub. A
/// persistence failure after a successful completion returns an error, with
/// the parsed result written to the log first so it stays recoverable.
pub async fn generate_application(
    pool: &PgPool,
    llm: &LlmClient,
    user_id: Uuid,
    request: &GenerateRequest,
) -> Result<GenerationOutcome, AppError> {
    info!(
        "Generating application for: {} at {}",
        request.job_title, request.company
    );

    let prompt = build_prompt(
        &request.job_title,
        &request.company,
        &request.job_description,
        &request.resume_content,
    );

    let completion = llm
        .call(GENERATION_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("AI generation failed: {e}")))?;

    debug!("AI response received, length: {}", completion.len());

    let result = parse_generation_output(&completion);

    let application = match insert_application(
        pool,
        NewApplication {
            user_id,
            job_title: &request.job_title,
            company: &request.company,
            job_description: &request.job_description,
            status: ApplicationStatus::Generated,
            result: &result,
        },
    )
    .await
    {
        Ok(row) => row,
        Err(e) => {
            // Stage the parsed result in the log before surfacing the failure.
            error!(
                "Failed to persist generated application: {e}; result: {}",
                serde_json::to_string(&result).unwrap_or_default()
            );
            return Err(AppError::Database(e));
        }
    };

    info!("Application saved successfully: {}", application.id);

    Ok(GenerationOutcome {
        application,
        result,
    })
}
