use serde::{Deserialize, Serialize};

/// Metadata of the current resume (content bytes stay server-side)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeInfo {
    pub id: i64,
    pub filename: String,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}

/// One company with the first apply link seen for it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyEntry {
    pub company: String,
    #[serde(rename = "careerSite")]
    pub career_site: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
