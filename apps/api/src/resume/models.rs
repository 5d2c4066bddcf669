//! Reply schemas for the upload-based features. Field names are camelCase on the wire,
//! matching what the dashboards read.

use serde::{Deserialize, Serialize};

use crate::contract::{check_score, ContractViolation, ReplyContract};

/// General résumé analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub ats_score: f64,
    pub skill_match: f64,
    pub missing_keywords: Vec<String>,
    pub summary: String,
    pub suggestions: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// `/api/analyzeResume` wraps its result; the other endpoints return theirs bare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResumeResponse {
    pub success: bool,
    pub analysis: ResumeAnalysis,
}

/// ATS compatibility report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsReport {
    pub ats_score: f64,
    pub passability_score: f64,
    /// "Excellent", "Good" or "Needs Improvement"
    pub overall_rating: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub formatting: FormattingCheck,
    pub keywords: ScoredAnalysis,
    pub sections: ScoredAnalysis,
    pub recommendations: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattingCheck {
    pub score: f64,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAnalysis {
    pub score: f64,
    pub analysis: String,
}

/// Résumé vs. job description comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    pub match_percentage: f64,
    pub experience_match: f64,
    pub role_alignment: f64,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub recommendations: String,
    pub job_title: String,
}

impl ReplyContract for ResumeAnalysis {
    fn validate(&self) -> Result<(), ContractViolation> {
        check_score("atsScore", self.ats_score)?;
        check_score("skillMatch", self.skill_match)
    }
}

impl ReplyContract for AtsReport {
    fn validate(&self) -> Result<(), ContractViolation> {
        check_score("atsScore", self.ats_score)?;
        check_score("passabilityScore", self.passability_score)?;
        check_score("formatting.score", self.formatting.score)?;
        check_score("keywords.score", self.keywords.score)?;
        check_score("sections.score", self.sections.score)
    }
}

impl ReplyContract for JobMatch {
    fn validate(&self) -> Result<(), ContractViolation> {
        check_score("matchPercentage", self.match_percentage)?;
        check_score("experienceMatch", self.experience_match)?;
        check_score("roleAlignment", self.role_alignment)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const ATS_REPLY: &str = r#"{
        "atsScore": 78,
        "passabilityScore": 74,
        "overallRating": "Good",
        "strengths": ["Standard section headers"],
        "weaknesses": ["Two-column layout"],
        "formatting": {"score": 65, "issues": ["Tables detected"]},
        "keywords": {"score": 80, "analysis": "Good density of backend terms"},
        "sections": {"score": 90, "analysis": "All core sections present"},
        "recommendations": "Switch to a single-column layout."
    }"#;

    pub(crate) const JOB_MATCH_REPLY: &str = r#"{
        "matchPercentage": 68,
        "experienceMatch": 70,
        "roleAlignment": 64,
        "matchedKeywords": ["Rust", "PostgreSQL"],
        "missingKeywords": ["Kubernetes"],
        "skillGaps": ["Container orchestration"],
        "recommendations": "Highlight deployment work.",
        "jobTitle": "Backend Engineer"
    }"#;

    pub(crate) const ANALYSIS_REPLY: &str = r#"{
        "atsScore": 82,
        "skillMatch": 71,
        "missingKeywords": ["CI/CD"],
        "summary": "Solid backend résumé.",
        "suggestions": "Quantify impact in the latest role.",
        "strengths": ["Clear structure"],
        "weaknesses": ["Few metrics"]
    }"#;

    #[test]
    fn test_ats_report_deserializes_nested_checks() {
        let report: AtsReport = serde_json::from_str(ATS_REPLY).unwrap();
        assert_eq!(report.formatting.issues, vec!["Tables detected"]);
        assert_eq!(report.sections.score, 90.0);
        assert!(report.validate().is_ok());
    }

    #[test]
    fn test_ats_report_flags_nested_score_out_of_range() {
        let mut report: AtsReport = serde_json::from_str(ATS_REPLY).unwrap();
        report.keywords.score = 120.0;
        assert_eq!(
            report.validate(),
            Err(ContractViolation::ScoreOutOfRange {
                field: "keywords.score",
                value: 120.0
            })
        );
    }

    #[test]
    fn test_job_match_requires_every_field() {
        let mut value: serde_json::Value = serde_json::from_str(JOB_MATCH_REPLY).unwrap();
        value.as_object_mut().unwrap().remove("jobTitle");
        assert!(serde_json::from_value::<JobMatch>(value).is_err());
    }

    #[test]
    fn test_analysis_serializes_camel_case() {
        let analysis: ResumeAnalysis = serde_json::from_str(ANALYSIS_REPLY).unwrap();
        let value = serde_json::to_value(&analysis).unwrap();
        assert_eq!(value["atsScore"], 82.0);
        assert!(value.get("ats_score").is_none());
    }
}
