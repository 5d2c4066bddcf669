// All LLM prompt templates for the mock-interview features.

use crate::llm_client::prompts::{fill_template, SCORE_SCALE_INSTRUCTION};

/// Placeholder shown to the model for a question the candidate left blank.
pub const NO_ANSWER: &str = "(no answer provided)";

/// Question generation prompt. Replace: {job_role}
pub const QUESTIONS_PROMPT_TEMPLATE: &str = r#"You are an experienced interviewer and hiring manager. Generate 6-7 thoughtful interview questions for a {job_role} position.

Requirements:
- Mix of behavioral, technical, and situational questions
- Questions should be relevant to the specific role
- Include both common interview questions and role-specific ones
- Avoid yes/no questions - focus on open-ended questions that allow detailed responses
- Questions should help assess skills, experience, problem-solving, and cultural fit

Return a JSON object with this EXACT schema (no extra fields):
{
  "questions": ["Question 1?", "Question 2?"]
}"#;

/// Answer evaluation prompt. Replace: {job_role}, {qa_text}, {score_scale}
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"You are an expert interviewer and career coach. Evaluate the following interview responses for a {job_role} position.

{qa_text}

Return a JSON object with this EXACT schema (no extra fields):
{
  "overallScore": number,
  "categoryScores": {
    "communication": number,
    "technical": number,
    "problemSolving": number,
    "leadership": number
  },
  "feedback": "Overall performance summary",
  "detailedFeedback": ["Specific feedback for answer 1", "..."],
  "strengths": ["Key strength demonstrated"],
  "improvements": ["Area that needs improvement"],
  "recommendations": "Specific recommendations for career development"
}

detailedFeedback has exactly one entry per answer, in order.

Focus on:
- Clarity and structure of responses
- Relevance to the role
- Problem-solving approach
- Technical competency (if applicable)
- Communication skills
- Leadership potential
- Examples and specificity
- Professional growth mindset

Provide constructive, actionable feedback that helps the candidate improve.

{score_scale}"#;

pub fn questions_prompt(job_role: &str) -> String {
    fill_template(QUESTIONS_PROMPT_TEMPLATE, &[("job_role", job_role)])
}

pub fn evaluation_prompt(job_role: &str, questions: &[String], answers: &[String]) -> String {
    let qa_text = qa_text(questions, answers);
    fill_template(
        EVALUATION_PROMPT_TEMPLATE,
        &[
            ("job_role", job_role),
            ("qa_text", &qa_text),
            ("score_scale", SCORE_SCALE_INSTRUCTION),
        ],
    )
}

/// `Question N: ...\nAnswer: ...` blocks separated by blank lines.
fn qa_text(questions: &[String], answers: &[String]) -> String {
    questions
        .iter()
        .zip(answers)
        .enumerate()
        .map(|(i, (question, answer))| {
            let answer = match answer.trim() {
                "" => NO_ANSWER,
                trimmed => trimmed,
            };
            format!("Question {}: {}\nAnswer: {}\n", i + 1, question.trim(), answer)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
