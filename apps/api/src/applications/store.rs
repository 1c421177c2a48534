//! Queries over the `job_applications` table.
//!
//! Ownership is enforced here: mutations match on both id and user_id, so a
//! record that exists but belongs to someone else behaves exactly like a
//! record that does not exist.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::application::{ApplicationStatus, GenerationResult, JobApplicationRow};

/// Parameters for persisting one generation attempt.
pub struct NewApplication<'a> {
    pub user_id: Uuid,
    pub job_title: &'a str,
    pub company: &'a str,
    pub job_description: &'a str,
    pub status: ApplicationStatus,
    pub result: &'a GenerationResult,
}

/// Returns the caller's applications, newest first.
pub async fn list_applications(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<JobApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, JobApplicationRow>(
        "SELECT * FROM job_applications WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Fetches one application under the ownership rule.
pub async fn get_application(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
) -> Result<Option<JobApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, JobApplicationRow>(
        "SELECT * FROM job_applications WHERE id = $1 AND user_id = $2",
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Inserts a generation attempt. Invoked only by the generation pipeline
/// after a successful model call.
pub async fn insert_application(
    pool: &PgPool,
    new: NewApplication<'_>,
) -> Result<JobApplicationRow, sqlx::Error> {
    sqlx::query_as::<_, JobApplicationRow>(
        r#"
        INSERT INTO job_applications
            (user_id, job_title, company, job_description, status,
             ats_score, generated_resume, generated_cover_letter,
             matched_keywords, suggestions)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(new.user_id)
    .bind(new.job_title)
    .bind(new.company)
    .bind(new.job_description)
    .bind(new.status.as_str())
    .bind(new.result.ats_score)
    .bind(&new.result.resume)
    .bind(&new.result.cover_letter)
    .bind(&new.result.matched_keywords)
    .bind(&new.result.suggestions)
    .fetch_one(pool)
    .await
}

/// Unconditional status overwrite — no transition validation, any status to
/// any status. Returns None when the id is not owned by the caller.
pub async fn update_status(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    status: ApplicationStatus,
) -> Result<Option<JobApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, JobApplicationRow>(
        r#"
        UPDATE job_applications
        SET status = $1, updated_at = now()
        WHERE id = $2 AND user_id = $3
        RETURNING *
        "#,
    )
    .bind(status.as_str())
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Deletes a record under the ownership rule. Returns false when nothing
/// matched. No cascading blob cleanup — stored resumes are untouched.
pub async fn delete_application(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM job_applications WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
