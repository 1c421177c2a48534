//! Prompt constants and the request builder for application generation.
//!
//! The builder is pure construction: all four fields are embedded verbatim,
//! with no sanitization or length capping. Required-field validation is the
//! caller's responsibility.

/// System prompt for application generation.
pub const GENERATION_SYSTEM: &str = "You are an expert resume writer and career consultant. \
    Your task is to analyze job descriptions and optimize resumes for ATS \
    (Applicant Tracking Systems) and hiring managers. \
    Always provide actionable, specific improvements.";

/// User prompt template. Replace `{job_title}`, `{company}`,
/// `{job_description}` and `{resume_content}` before sending.
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"I need you to create a tailored resume and cover letter for the following job:

JOB TITLE: {job_title}
COMPANY: {company}

JOB DESCRIPTION:
{job_description}

MY CURRENT RESUME/BACKGROUND:
{resume_content}

Please provide:
1. A tailored resume optimized for this specific job (highlight relevant experience, use keywords from job description)
2. A professional cover letter addressing the company and role
3. ATS score (0-100) - estimate how well this application matches the job requirements
4. List of matched keywords from the job description
5. 3-5 specific suggestions to improve the application

Return your response in this EXACT JSON format:
{
  "resume": "Full tailored resume text in markdown format",
  "coverLetter": "Full cover letter text",
  "atsScore": 85,
  "matchedKeywords": ["keyword1", "keyword2"],
  "suggestions": ["suggestion1", "suggestion2"]
}"#;

/// Substituted for the resume slot when the caller has no stored resume
/// text. Switches the model into template-generation mode.
pub const TEMPLATE_MODE_RESUME: &str =
    "No resume provided yet - please create a template highlighting key skills needed for this role";

/// Builds the user prompt for one generation request.
pub fn build_prompt(
    job_title: &str,
    company: &str,
    job_description: &str,
    resume_content: &str,
) -> String {
    let resume_content = if resume_content.is_empty() {
        TEMPLATE_MODE_RESUME
    } else {
        resume_content
    };

    GENERATION_PROMPT_TEMPLATE
        .replace("{job_title}", job_title)
        .replace("{company}", company)
        .replace("{job_description}", job_description)
        .replace("{resume_content}", resume_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_all_fields_verbatim() {
        let prompt = build_prompt(
            "Senior Product Manager",
            "TechCorp",
            "Own the roadmap. Requires SQL and stakeholder management.",
            "10 years of product experience.",
        );

        assert!(prompt.contains("Senior Product Manager"));
        assert!(prompt.contains("TechCorp"));
        assert!(prompt.contains("Own the roadmap. Requires SQL and stakeholder management."));
        assert!(prompt.contains("10 years of product experience."));
    }

    #[test]
    fn test_empty_resume_switches_to_template_mode() {
        let prompt = build_prompt("Software Engineer", "Acme", "requires React", "");
        assert!(prompt.contains(TEMPLATE_MODE_RESUME));
    }

    #[test]
    fn test_nonempty_resume_is_not_replaced() {
        let prompt = build_prompt("Software Engineer", "Acme", "requires React", "My resume");
        assert!(prompt.contains("My resume"));
        assert!(!prompt.contains(TEMPLATE_MODE_RESUME));
    }

    #[test]
    fn test_prompt_demands_the_exact_json_shape() {
        let prompt = build_prompt("a", "b", "c", "d");
        for field in ["\"resume\"", "\"coverLetter\"", "\"atsScore\"", "\"matchedKeywords\"", "\"suggestions\""] {
            assert!(prompt.contains(field), "missing {field} in instruction block");
        }
    }

    #[test]
    fn test_long_descriptions_pass_through_uncapped() {
        let long_jd = "responsibilities ".repeat(10_000);
        let prompt = build_prompt("Engineer", "Acme", &long_jd, "");
        assert!(prompt.contains(&long_jd));
    }
}
