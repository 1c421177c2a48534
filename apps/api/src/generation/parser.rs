//! Parsing of model output into a `GenerationResult`.
//!
//! Models usually honor the JSON instruction but often wrap the object in a
//! markdown fence, sometimes inside surrounding prose. Fenced content takes
//! priority over the raw text. If nothing parses, the request still
//! succeeds with a degraded stub: once the model has answered, parsing never
//! fails the request.

use tracing::warn;

use crate::models::application::GenerationResult;

/// Cover letter used when the model's reply could not be parsed.
pub const FALLBACK_COVER_LETTER: &str =
    "Please review the generated resume and provide a cover letter.";

/// ATS score reported for unparseable replies.
pub const FALLBACK_ATS_SCORE: i32 = 75;

/// The single suggestion attached to a degraded result.
pub const FALLBACK_SUGGESTION: &str = "Review the generated content and refine as needed";

/// Returns the contents of the first ```json (preferred) or generic ```
/// fence found anywhere in the text.
fn extract_fenced(text: &str) -> Option<&str> {
    if let Some(start) = text.find("```json") {
        let rest = &text[start + "```json".len()..];
        if let Some(end) = rest.find("```") {
            return Some(rest[..end].trim());
        }
    }

    if let Some(start) = text.find("```") {
        let rest = &text[start + "```".len()..];
        if let Some(end) = rest.find("```") {
            return Some(rest[..end].trim());
        }
    }

    None
}

/// Parses a model completion into a `GenerationResult`, degrading instead of
/// failing: an unparseable reply yields the raw text as the resume plus
/// fixed placeholder fields.
pub fn parse_generation_output(raw: &str) -> GenerationResult {
    let candidate = extract_fenced(raw).unwrap_or(raw);

    match serde_json::from_str::<GenerationResult>(candidate) {
        Ok(result) => result,
        Err(err) => {
            warn!("Model reply was not parseable JSON ({err}); returning degraded result");
            GenerationResult {
                resume: raw.to_string(),
                cover_letter: FALLBACK_COVER_LETTER.to_string(),
                ats_score: FALLBACK_ATS_SCORE,
                matched_keywords: Vec::new(),
                suggestions: vec![FALLBACK_SUGGESTION.to_string()],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = r##"{"resume":"# R","coverLetter":"Dear...","atsScore":88,"matchedKeywords":["React","AWS"],"suggestions":["Add metrics"]}"##;

    #[test]
    fn test_bare_json_round_trips_all_five_fields() {
        let result = parse_generation_output(WELL_FORMED);
        assert_eq!(result.resume, "# R");
        assert_eq!(result.cover_letter, "Dear...");
        assert_eq!(result.ats_score, 88);
        assert_eq!(result.matched_keywords, vec!["React", "AWS"]);
        assert_eq!(result.suggestions, vec!["Add metrics"]);
    }

    #[test]
    fn test_json_fence_round_trips() {
        let reply = format!("```json\n{WELL_FORMED}\n```");
        let result = parse_generation_output(&reply);
        assert_eq!(result.ats_score, 88);
        assert_eq!(result.matched_keywords, vec!["React", "AWS"]);
    }

    #[test]
    fn test_generic_fence_round_trips() {
        let reply = format!("```\n{WELL_FORMED}\n```");
        let result = parse_generation_output(&reply);
        assert_eq!(result.ats_score, 88);
        assert_eq!(result.resume, "# R");
    }

    #[test]
    fn test_fenced_content_takes_priority_over_surrounding_prose() {
        let reply = format!("Here is your tailored application:\n\n```json\n{WELL_FORMED}\n```\n\nGood luck!");
        let result = parse_generation_output(&reply);
        assert_eq!(result.ats_score, 88);
        assert_eq!(result.cover_letter, "Dear...");
    }

    #[test]
    fn test_unstructured_prose_degrades_to_fixed_stub() {
        let prose = "Your resume looks solid overall. Lead with the platform work and quantify the migration win.";
        let result = parse_generation_output(prose);

        assert_eq!(result.resume, prose);
        assert_eq!(result.cover_letter, FALLBACK_COVER_LETTER);
        assert_eq!(result.ats_score, FALLBACK_ATS_SCORE);
        assert!(result.matched_keywords.is_empty());
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.suggestions[0], FALLBACK_SUGGESTION);
    }

    #[test]
    fn test_empty_completion_degrades() {
        let result = parse_generation_output("");
        assert_eq!(result.resume, "");
        assert_eq!(result.ats_score, FALLBACK_ATS_SCORE);
        assert_eq!(result.suggestions.len(), 1);
    }

    #[test]
    fn test_malformed_json_keeps_raw_text_as_resume() {
        let reply = "```json\n{\"resume\": \"truncated";
        let result = parse_generation_output(reply);
        assert_eq!(result.resume, reply);
        assert_eq!(result.cover_letter, FALLBACK_COVER_LETTER);
    }

    #[test]
    fn test_json_missing_required_fields_degrades() {
        let reply = r##"{"resume": "# R", "atsScore": 90}"##;
        let result = parse_generation_output(reply);
        assert_eq!(result.ats_score, FALLBACK_ATS_SCORE);
        assert_eq!(result.resume, reply);
    }

    #[test]
    fn test_extra_json_fields_are_tolerated() {
        let reply = r##"{"resume":"# R","coverLetter":"Dear...","atsScore":70,"matchedKeywords":[],"suggestions":[],"confidence":"high"}"##;
        let result = parse_generation_output(reply);
        assert_eq!(result.ats_score, 70);
    }

    #[test]
    fn test_extract_fenced_none_without_closing_marker() {
        assert_eq!(extract_fenced("```json\n{\"a\": 1}"), None);
    }

    #[test]
    fn test_extract_fenced_prefers_json_tag() {
        let text = "```\nplain\n```\n```json\n{\"a\":1}\n```";
        assert_eq!(extract_fenced(text), Some("{\"a\":1}"));
    }
}
