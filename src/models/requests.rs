use serde::{Deserialize, Serialize};
use validator::Validate;

/// One scraped posting in a batch upsert
///
/// `status` and `matching_score` are intentionally absent: status is owned
/// by the apply endpoint and the score is always derived server-side.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApplicationPayload {
    #[validate(length(min = 1))]
    #[serde(alias = "job_id", rename = "jobId")]
    pub job_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "job_title", rename = "jobTitle")]
    pub job_title: String,
    #[validate(length(min = 1))]
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(alias = "apply_link", rename = "applyLink", default)]
    pub apply_link: Option<String>,
    #[serde(alias = "search_key", rename = "searchKey", default)]
    pub search_key: Option<String>,
    #[serde(alias = "posted_time", rename = "postedTime")]
    pub posted_time: chrono::DateTime<chrono::Utc>,
    #[validate(length(min = 1))]
    pub source: String,
}

/// Query parameters accepted by the application listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListApplicationsQuery {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub timeframe: Option<String>,
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

/// Query parameters for the resume upload endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResumeUploadQuery {
    #[validate(length(min = 1))]
    pub filename: String,
}
