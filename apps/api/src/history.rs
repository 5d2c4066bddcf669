//! Browser-local history: typed model of what the dashboards keep in `localStorage`.
//!
//! Nothing here is persisted server-side. Each feature area keeps the
//! `HISTORY_LIMIT` most recent results under its own key, newest first.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub const HISTORY_LIMIT: usize = 10;
pub const THEME_KEY: &str = "theme";

/// The `localStorage` key of each feature area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HistoryKey {
    ResumeAnalyses,
    AtsChecks,
    JobMatches,
    MockTests,
}

impl HistoryKey {
    pub const ALL: [HistoryKey; 4] = [
        HistoryKey::ResumeAnalyses,
        HistoryKey::AtsChecks,
        HistoryKey::JobMatches,
        HistoryKey::MockTests,
    ];

    pub fn storage_key(&self) -> &'static str {
        match self {
            HistoryKey::ResumeAnalyses => "resumeAnalyses",
            HistoryKey::AtsChecks => "atsChecks",
            HistoryKey::JobMatches => "jobMatches",
            HistoryKey::MockTests => "mockTests",
        }
    }

    /// Name of the field that labels a record in the history list.
    pub fn label_field(&self) -> &'static str {
        match self {
            HistoryKey::MockTests => "jobRole",
            _ => "fileName",
        }
    }
}

/// One saved result. Upload features label it with the file name, mock tests with the role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord<T> {
    /// Creation time in Unix epoch milliseconds.
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions_count: Option<usize>,
    pub date: DateTime<Utc>,
    pub result: T,
}

impl<T> HistoryRecord<T> {
    /// Record for an upload-based result (analysis, ATS check, job match).
    pub fn upload(file_name: impl Into<String>, result: T, at: DateTime<Utc>) -> Self {
        Self {
            id: at.timestamp_millis(),
            file_name: Some(file_name.into()),
            job_role: None,
            job_title: None,
            questions_count: None,
            date: at,
            result,
        }
    }

    /// Record for a finished mock interview.
    pub fn mock_test(
        job_role: impl Into<String>,
        questions_count: usize,
        result: T,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: at.timestamp_millis(),
            file_name: None,
            job_role: Some(job_role.into()),
            job_title: None,
            questions_count: Some(questions_count),
            date: at,
            result,
        }
    }

    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = Some(job_title.into());
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.file_name.as_deref().or(self.job_role.as_deref())
    }
}

/// Most-recent-first list holding at most `HISTORY_LIMIT` records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HistoryList<T> {
    records: Vec<HistoryRecord<T>>,
}

impl<T> Default for HistoryList<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T> HistoryList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts at the front and drops whatever falls past the limit.
    pub fn push(&mut self, record: HistoryRecord<T>) {
        self.records.insert(0, record);
        self.records.truncate(HISTORY_LIMIT);
    }

    pub fn latest(&self) -> Option<&HistoryRecord<T>> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryRecord<T>> {
        self.records.iter()
    }
}

impl<T: DeserializeOwned> HistoryList<T> {
    /// Reads a stored array. A missing value (`""` or `null`) is an empty list; an
    /// over-long list keeps its newest `HISTORY_LIMIT` entries.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::new());
        }
        let mut records: Vec<HistoryRecord<T>> =
            serde_json::from_str::<Option<Vec<_>>>(raw)?.unwrap_or_default();
        records.truncate(HISTORY_LIMIT);
        Ok(Self { records })
    }
}

impl<T: Serialize> HistoryList<T> {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.records)
    }
}

/// Colour scheme preference stored under `THEME_KEY`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    /// Unknown or missing values fall back to the default.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("dark") => Theme::Dark,
            Some("light") => Theme::Light,
            _ => Theme::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}
