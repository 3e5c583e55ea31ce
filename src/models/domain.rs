use serde::{Deserialize, Serialize};

/// A tracked job application record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    #[serde(rename = "jobId")]
    pub job_id: String,
    #[serde(rename = "jobTitle")]
    pub job_title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "applyLink", default)]
    pub apply_link: Option<String>,
    #[serde(rename = "searchKey", default)]
    pub search_key: Option<String>,
    #[serde(rename = "postedTime")]
    pub posted_time: chrono::DateTime<chrono::Utc>,
    pub source: String,
    #[serde(rename = "matchingScore")]
    pub matching_score: f64,
    pub status: ApplicationStatus,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Application lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "application_status", rename_all = "snake_case")]
pub enum ApplicationStatus {
    NotApplied,
    Applied,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::NotApplied => "not_applied",
            ApplicationStatus::Applied => "applied",
        }
    }
}

/// An uploaded resume; the most recent upload is the current one
#[derive(Debug, Clone)]
pub struct Resume {
    pub id: i64,
    pub filename: String,
    pub content: Vec<u8>,
    pub text_content: String,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}

/// Explicit filter parameters for the application list
///
/// The core applies exactly what it is given; the "not_applied" status and
/// descending-sort defaults are decided at the HTTP boundary.
#[derive(Debug, Clone)]
pub struct ListFilter {
    pub status: Option<String>,
    pub source: Option<String>,
    pub timeframe: Option<String>,
    pub keyword: Option<String>,
    pub sort: SortDirection,
}

/// Sort order over posted_time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// "desc" sorts newest first; every other value, including absent,
    /// sorts ascending
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}
