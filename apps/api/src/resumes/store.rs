//! Queries over the `resumes` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::resume::ResumeRow;

/// Inserts one resume metadata row.
pub async fn insert_resume(
    pool: &PgPool,
    user_id: Uuid,
    file_name: &str,
    file_path: &str,
    original_content: &str,
) -> Result<ResumeRow, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes (user_id, file_name, file_path, original_content)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(file_name)
    .bind(file_path)
    .bind(original_content)
    .fetch_one(pool)
    .await
}

/// The most recently uploaded resume for a user — the only row the
/// generation flow consults. Older uploads are kept but never merged.
pub async fn latest_resume(pool: &PgPool, user_id: Uuid) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE user_id = $1 ORDER BY created_at DESC LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
