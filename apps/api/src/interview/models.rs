//! Request and reply schemas for the mock-interview features.

use serde::{Deserialize, Serialize};

use crate::contract::{check_non_empty, check_score, ContractViolation, ReplyContract};

// ────────────────────────────────────────────────────────────────────────────
// Requests
// ────────────────────────────────────────────────────────────────────────────

/// Fields are optional so a missing one is reported as a 400 with our own message.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsRequest {
    #[serde(default)]
    pub job_role: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateAnswersRequest {
    #[serde(default)]
    pub job_role: Option<String>,
    #[serde(default)]
    pub questions: Option<Vec<String>>,
    #[serde(default)]
    pub answers: Option<Vec<String>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Replies
// ────────────────────────────────────────────────────────────────────────────

/// Generated interview questions. The model sometimes answers with a bare array
/// instead of the requested object; both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "QuestionsReply")]
pub struct InterviewQuestions {
    pub questions: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum QuestionsReply {
    Wrapped { questions: Vec<String> },
    Bare(Vec<String>),
}

impl From<QuestionsReply> for InterviewQuestions {
    fn from(reply: QuestionsReply) -> Self {
        let questions = match reply {
            QuestionsReply::Wrapped { questions } | QuestionsReply::Bare(questions) => questions,
        };
        InterviewQuestions {
            questions: questions
                .into_iter()
                .map(|q| q.trim().to_string())
                .filter(|q| !q.is_empty())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewEvaluation {
    pub overall_score: f64,
    pub category_scores: CategoryScores,
    /// Overall performance summary.
    pub feedback: String,
    /// One entry per answer, in question order.
    pub detailed_feedback: Vec<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub recommendations: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub communication: f64,
    pub technical: f64,
    pub problem_solving: f64,
    pub leadership: f64,
}

impl ReplyContract for InterviewQuestions {
    fn validate(&self) -> Result<(), ContractViolation> {
        check_non_empty("questions", &self.questions)
    }
}

impl ReplyContract for InterviewEvaluation {
    fn validate(&self) -> Result<(), ContractViolation> {
        check_score("overallScore", self.overall_score)?;
        check_score("categoryScores.communication", self.category_scores.communication)?;
        check_score("categoryScores.technical", self.category_scores.technical)?;
        check_score("categoryScores.problemSolving", self.category_scores.problem_solving)?;
        check_score("categoryScores.leadership", self.category_scores.leadership)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const EVALUATION_REPLY: &str = r#"{
        "overallScore": 76,
        "categoryScores": {"communication": 82, "technical": 71, "problemSolving": 77, "leadership": 60},
        "feedback": "Clear answers with room for more depth.",
        "detailedFeedback": ["Good STAR structure", "Add metrics"],
        "strengths": ["Structured thinking"],
        "improvements": ["Quantify outcomes"],
        "recommendations": "Practice system design questions."
    }"#;

    #[test]
    fn test_questions_accept_wrapped_object() {
        let q: InterviewQuestions =
            serde_json::from_str(r#"{"questions": ["Why Rust?", "Tell me about a failure."]}"#)
                .unwrap();
        assert_eq!(q.questions.len(), 2);
    }

    #[test]
    fn test_questions_accept_bare_array_and_drop_blanks() {
        let q: InterviewQuestions =
            serde_json::from_str(r#"["  Why Rust?  ", "", "Describe a hard bug."]"#).unwrap();
        assert_eq!(q.questions, vec!["Why Rust?", "Describe a hard bug."]);
    }

    #[test]
    fn test_questions_serialize_as_object() {
        let q = InterviewQuestions {
            questions: vec!["Why Rust?".to_string()],
        };
        assert_eq!(
            serde_json::to_value(&q).unwrap(),
            serde_json::json!({"questions": ["Why Rust?"]})
        );
    }

    #[test]
    fn test_empty_question_list_violates_contract() {
        let q: InterviewQuestions = serde_json::from_str(r#"{"questions": []}"#).unwrap();
        assert!(q.validate().is_err());
    }

    #[test]
    fn test_evaluation_validates_category_scores() {
        let mut evaluation: InterviewEvaluation = serde_json::from_str(EVALUATION_REPLY).unwrap();
        assert!(evaluation.validate().is_ok());
        evaluation.category_scores.problem_solving = -5.0;
        assert!(matches!(
            evaluation.validate(),
            Err(ContractViolation::ScoreOutOfRange {
                field: "categoryScores.problemSolving",
                ..
            })
        ));
    }

    #[test]
    fn test_evaluate_request_tolerates_missing_fields() {
        let req: EvaluateAnswersRequest = serde_json::from_str(r#"{"jobRole": "SRE"}"#).unwrap();
        assert_eq!(req.job_role.as_deref(), Some("SRE"));
        assert!(req.questions.is_none());
        assert!(req.answers.is_none());
    }
}
