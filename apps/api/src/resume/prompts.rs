// All LLM prompt templates for the upload-based features.
// Placeholders are filled with `llm_client::prompts::fill_template`.

use crate::llm_client::prompts::{fill_template, SCORE_SCALE_INSTRUCTION};

/// Résumé analysis prompt. Replace: {resume_text}, {score_scale}
pub const ANALYZE_PROMPT_TEMPLATE: &str = r#"Analyze this resume against general best practices and return ONLY valid JSON.

Resume content:
{resume_text}

Return a JSON object with this EXACT schema (no extra fields):
{
  "atsScore": number,
  "skillMatch": number,
  "missingKeywords": ["string"],
  "summary": "string",
  "suggestions": "string",
  "strengths": ["string"],
  "weaknesses": ["string"]
}

{score_scale}"#;

/// ATS compatibility prompt. Replace: {resume_text}, {score_scale}
pub const ATS_PROMPT_TEMPLATE: &str = r#"You are an ATS (Applicant Tracking System) specialist. Analyze the following resume for ATS compatibility and provide a comprehensive assessment.

Resume Text:
{resume_text}

Return a JSON object with this EXACT schema (no extra fields):
{
  "atsScore": number,
  "passabilityScore": number,
  "overallRating": "Excellent" | "Good" | "Needs Improvement",
  "strengths": ["ATS-friendly element found"],
  "weaknesses": ["ATS issue that needs fixing"],
  "formatting": {"score": number, "issues": ["string"]},
  "keywords": {"score": number, "analysis": "string"},
  "sections": {"score": number, "analysis": "string"},
  "recommendations": "Detailed recommendations for ATS optimization"
}

atsScore is overall ATS compatibility; passabilityScore is the likelihood of passing ATS screening.

Focus on:
- Standard section headers (Summary, Experience, Education, Skills)
- Keyword density and relevance
- Formatting simplicity (no graphics, tables, or complex layouts)
- File format compatibility
- Text readability by parsing software
- Contact information placement
- Date formats and consistency
- Bullet points vs paragraphs
- Font choices and readability

{score_scale}"#;

/// Job matching prompt. Replace: {resume_text}, {job_description}, {score_scale}
pub const JOB_MATCH_PROMPT_TEMPLATE: &str = r#"You are an expert job matching specialist. Compare the candidate's resume against the job description and provide a comprehensive analysis.

Resume:
{resume_text}

Job Description:
{job_description}

Return a JSON object with this EXACT schema (no extra fields):
{
  "matchPercentage": number,
  "experienceMatch": number,
  "roleAlignment": number,
  "matchedKeywords": ["keyword present in both resume and job description"],
  "missingKeywords": ["important job keyword missing from the resume"],
  "skillGaps": ["skill the candidate needs to develop"],
  "recommendations": "Detailed recommendations for improving the match",
  "jobTitle": "Job title extracted from the description"
}

Focus on:
- Technical skills alignment
- Experience level match
- Industry background relevance
- Required vs. preferred qualifications
- Career progression fit

{score_scale}"#;

pub fn analyze_prompt(resume_text: &str) -> String {
    fill_template(
        ANALYZE_PROMPT_TEMPLATE,
        &[
            ("resume_text", resume_text),
            ("score_scale", SCORE_SCALE_INSTRUCTION),
        ],
    )
}

pub fn ats_prompt(resume_text: &str) -> String {
    fill_template(
        ATS_PROMPT_TEMPLATE,
        &[
            ("resume_text", resume_text),
            ("score_scale", SCORE_SCALE_INSTRUCTION),
        ],
    )
}

pub fn job_match_prompt(resume_text: &str, job_description: &str) -> String {
    fill_template(
        JOB_MATCH_PROMPT_TEMPLATE,
        &[
            ("resume_text", resume_text),
            ("job_description", job_description),
            ("score_scale", SCORE_SCALE_INSTRUCTION),
        ],
    )
}
