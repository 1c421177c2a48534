//! Dashboard composition — the single aggregate read the UI performs on
//! login and again, unconditionally, after every status update and every
//! new generation. Status changes and new records are never patched into
//! the client incrementally; the client re-reads this endpoint instead.

use axum::{extract::State, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::applications::store::list_applications;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::application::JobApplicationRow;
use crate::models::resume::ResumeRow;
use crate::resumes::store::latest_resume;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileSummary {
    pub user_id: Uuid,
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub profile: ProfileSummary,
    /// Most recent resume only; earlier uploads are never merged.
    pub resume: Option<ResumeRow>,
    pub resume_uploaded: bool,
    /// Newest first.
    pub applications: Vec<JobApplicationRow>,
    pub total_applications: usize,
}

/// Assembles the dashboard payload from its parts.
pub fn summarize(
    user: &AuthUser,
    resume: Option<ResumeRow>,
    applications: Vec<JobApplicationRow>,
) -> DashboardResponse {
    DashboardResponse {
        profile: ProfileSummary {
            user_id: user.user_id,
            email: user.email.clone(),
        },
        resume_uploaded: resume.is_some(),
        resume,
        total_applications: applications.len(),
        applications,
    }
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<DashboardResponse>, AppError> {
    let resume = latest_resume(&state.db, user.user_id).await?;
    let applications = list_applications(&state.db, user.user_id).await?;

    Ok(Json(summarize(&user, resume, applications)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_user() -> AuthUser {
        AuthUser {
            user_id: Uuid::new_v4(),
            email: Some("dev@example.com".to_string()),
        }
    }

    fn test_resume(user_id: Uuid) -> ResumeRow {
        ResumeRow {
            id: Uuid::new_v4(),
            user_id,
            file_name: "resume.txt".to_string(),
            file_path: format!("{user_id}/1.txt"),
            original_content: Some("10 years of Rust".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_summary_without_resume_signals_upload_view() {
        let user = test_user();
        let summary = summarize(&user, None, Vec::new());
        assert!(!summary.resume_uploaded);
        assert!(summary.resume.is_none());
        assert_eq!(summary.total_applications, 0);
    }

    #[test]
    fn test_summary_with_resume_signals_generate_view() {
        let user = test_user();
        let summary = summarize(&user, Some(test_resume(user.user_id)), Vec::new());
        assert!(summary.resume_uploaded);
        assert_eq!(
            summary.resume.as_ref().unwrap().original_content.as_deref(),
            Some("10 years of Rust")
        );
    }

    #[test]
    fn test_summary_counts_match_list_length() {
        let user = test_user();
        let row = JobApplicationRow {
            id: Uuid::new_v4(),
            user_id: user.user_id,
            job_title: "Engineer".to_string(),
            company: "Acme".to_string(),
            job_description: "jd".to_string(),
            status: "generated".to_string(),
            ats_score: Some(80),
            generated_resume: None,
            generated_cover_letter: None,
            matched_keywords: None,
            suggestions: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let summary = summarize(&user, None, vec![row.clone(), row]);
        assert_eq!(summary.total_applications, 2);
        assert_eq!(summary.applications.len(), 2);
    }
}
