use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One generation attempt, persisted. Serializes with the snake_case column
/// names the frontend reads directly.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobApplicationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_title: String,
    pub company: String,
    pub job_description: String,
    pub status: String,
    pub ats_score: Option<i32>,
    pub generated_resume: Option<String>,
    pub generated_cover_letter: Option<String>,
    pub matched_keywords: Option<Vec<String>>,
    pub suggestions: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Application status. Successful generation always writes `Generated`;
/// after that, any status may be set from any other by explicit user
/// action — there are no transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Generated,
    Applied,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Generated => "generated",
            ApplicationStatus::Applied => "applied",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The view the UI renders — either fresh from a generation call or
/// rehydrated from a stored application. Wire format is camelCase and must
/// match the JSON shape the model is instructed to return.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub resume: String,
    pub cover_letter: String,
    pub ats_score: i32,
    pub matched_keywords: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Read-only replay of a stored application into the result view.
/// Columns that were never filled map to neutral defaults.
impl From<&JobApplicationRow> for GenerationResult {
    fn from(row: &JobApplicationRow) -> Self {
        GenerationResult {
            resume: row.generated_resume.clone().unwrap_or_default(),
            cover_letter: row.generated_cover_letter.clone().unwrap_or_default(),
            ats_score: row.ats_score.unwrap_or(0),
            matched_keywords: row.matched_keywords.clone().unwrap_or_default(),
            suggestions: row.suggestions.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> JobApplicationRow {
        JobApplicationRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            job_title: "Software Engineer".to_string(),
            company: "Acme".to_string(),
            job_description: "requires React and AWS".to_string(),
            status: "generated".to_string(),
            ats_score: Some(88),
            generated_resume: Some("# R".to_string()),
            generated_cover_letter: Some("Dear...".to_string()),
            matched_keywords: Some(vec!["React".to_string(), "AWS".to_string()]),
            suggestions: Some(vec!["Add metrics".to_string()]),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ApplicationStatus::Applied).unwrap(),
            r#""applied""#
        );
        assert_eq!(
            serde_json::to_string(&ApplicationStatus::Pending).unwrap(),
            r#""pending""#
        );
    }

    #[test]
    fn test_status_round_trips() {
        for status in [
            ApplicationStatus::Pending,
            ApplicationStatus::Generated,
            ApplicationStatus::Applied,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            let back: ApplicationStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
            assert_eq!(json, format!("\"{status}\""));
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result: Result<ApplicationStatus, _> = serde_json::from_str(r#""archived""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rehydration_copies_all_five_fields() {
        let row = sample_row();
        let result = GenerationResult::from(&row);
        assert_eq!(result.resume, "# R");
        assert_eq!(result.cover_letter, "Dear...");
        assert_eq!(result.ats_score, 88);
        assert_eq!(result.matched_keywords, vec!["React", "AWS"]);
        assert_eq!(result.suggestions, vec!["Add metrics"]);
    }

    #[test]
    fn test_rehydration_defaults_for_missing_columns() {
        let mut row = sample_row();
        row.ats_score = None;
        row.generated_resume = None;
        row.generated_cover_letter = None;
        row.matched_keywords = None;
        row.suggestions = None;

        let result = GenerationResult::from(&row);
        assert_eq!(result.resume, "");
        assert_eq!(result.cover_letter, "");
        assert_eq!(result.ats_score, 0);
        assert!(result.matched_keywords.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_generation_result_wire_format_is_camel_case() {
        let result = GenerationResult::from(&sample_row());
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("coverLetter").is_some());
        assert!(value.get("atsScore").is_some());
        assert!(value.get("matchedKeywords").is_some());
        assert!(value.get("cover_letter").is_none());
    }
}
