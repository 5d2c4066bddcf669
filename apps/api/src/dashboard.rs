//! Dashboard scorecards. The only rule the result views own is banding scores into tiers.
//!
//! Bands: ≥ 80 good, ≥ 60 fair, everything else poor.

use serde::{Deserialize, Serialize};

use crate::interview::models::{InterviewEvaluation, InterviewQuestions};
use crate::resume::models::{AnalyzeResumeResponse, AtsReport, JobMatch, ResumeAnalysis};

pub const GOOD_THRESHOLD: f64 = 80.0;
pub const FAIR_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Good,
    Fair,
    Poor,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= GOOD_THRESHOLD {
            ScoreTier::Good
        } else if score >= FAIR_THRESHOLD {
            ScoreTier::Fair
        } else {
            ScoreTier::Poor
        }
    }

    /// Qualitative label shown under a score.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreTier::Good => "Excellent",
            ScoreTier::Fair => "Good",
            ScoreTier::Poor => "Needs Improvement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCard {
    pub label: &'static str,
    pub score: f64,
    pub tier: ScoreTier,
}

impl ScoreCard {
    pub fn new(label: &'static str, score: f64) -> Self {
        Self {
            label,
            score,
            tier: ScoreTier::from_score(score),
        }
    }
}

/// The score cards a result renders, headline first.
pub trait Scorecard {
    fn score_cards(&self) -> Vec<ScoreCard>;

    fn headline(&self) -> Option<ScoreCard> {
        self.score_cards().into_iter().next()
    }
}

impl Scorecard for ResumeAnalysis {
    fn score_cards(&self) -> Vec<ScoreCard> {
        vec![
            ScoreCard::new("ATS Score", self.ats_score),
            ScoreCard::new("Skill Match", self.skill_match),
        ]
    }
}

impl Scorecard for AnalyzeResumeResponse {
    fn score_cards(&self) -> Vec<ScoreCard> {
        self.analysis.score_cards()
    }
}

impl Scorecard for AtsReport {
    fn score_cards(&self) -> Vec<ScoreCard> {
        vec![
            ScoreCard::new("ATS Score", self.ats_score),
            ScoreCard::new("Formatting", self.formatting.score),
            ScoreCard::new("Keywords", self.keywords.score),
            ScoreCard::new("Sections", self.sections.score),
            ScoreCard::new("Passability", self.passability_score),
        ]
    }
}

impl Scorecard for JobMatch {
    fn score_cards(&self) -> Vec<ScoreCard> {
        vec![
            ScoreCard::new("Match", self.match_percentage),
            ScoreCard::new("Experience Match", self.experience_match),
            ScoreCard::new("Role Alignment", self.role_alignment),
        ]
    }
}

impl Scorecard for InterviewEvaluation {
    fn score_cards(&self) -> Vec<ScoreCard> {
        let c = &self.category_scores;
        vec![
            ScoreCard::new("Overall", self.overall_score),
            ScoreCard::new("Communication", c.communication),
            ScoreCard::new("Technical", c.technical),
            ScoreCard::new("Problem Solving", c.problem_solving),
            ScoreCard::new("Leadership", c.leadership),
        ]
    }
}

impl Scorecard for InterviewQuestions {
    fn score_cards(&self) -> Vec<ScoreCard> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::history::{HistoryList, HistoryRecord};
    use crate::interview::models::tests::EVALUATION_REPLY;
    use crate::resume::models::tests::{ANALYSIS_REPLY, ATS_REPLY, JOB_MATCH_REPLY};

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ScoreTier::from_score(100.0), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(80.0), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(79.9), ScoreTier::Fair);
        assert_eq!(ScoreTier::from_score(60.0), ScoreTier::Fair);
        assert_eq!(ScoreTier::from_score(59.9), ScoreTier::Poor);
        assert_eq!(ScoreTier::from_score(0.0), ScoreTier::Poor);
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(ScoreTier::Good.label(), "Excellent");
        assert_eq!(ScoreTier::Fair.label(), "Good");
        assert_eq!(ScoreTier::Poor.label(), "Needs Improvement");
    }

    #[test]
    fn test_ats_cards_follow_dashboard_order() {
        let report: AtsReport = serde_json::from_str(ATS_REPLY).unwrap();
        let labels: Vec<_> = report.score_cards().iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            ["ATS Score", "Formatting", "Keywords", "Sections", "Passability"]
        );
        assert_eq!(report.headline().unwrap().tier, ScoreTier::Fair);
    }

    fn assert_round_trip<T>(result: T)
    where
        T: Scorecard + serde::Serialize + serde::de::DeserializeOwned,
    {
        let before = result.score_cards();
        let mut list = HistoryList::new();
        list.push(HistoryRecord::upload("resume.pdf", result, Utc::now()));

        let stored = list.to_json().unwrap();
        let reloaded: HistoryList<T> = HistoryList::from_json(&stored).unwrap();
        let after = reloaded.latest().unwrap().result.score_cards();
        assert_eq!(before, after);
    }

    #[test]
    fn test_saved_results_render_identical_scores_after_reload() {
        let analysis: ResumeAnalysis = serde_json::from_str(ANALYSIS_REPLY).unwrap();
        assert_round_trip(AnalyzeResumeResponse {
            success: true,
            analysis,
        });
        assert_round_trip(serde_json::from_str::<AtsReport>(ATS_REPLY).unwrap());
        assert_round_trip(serde_json::from_str::<JobMatch>(JOB_MATCH_REPLY).unwrap());
        assert_round_trip(serde_json::from_str::<InterviewEvaluation>(EVALUATION_REPLY).unwrap());
    }
}
