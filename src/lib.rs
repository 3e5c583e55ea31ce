//! JobWatcher - job application tracker with resume matching
//!
//! This library tracks scraped job postings, scores each posting against
//! the candidate's current resume by keyword overlap, and serves a
//! filterable application list. The scoring and filtering core is pure;
//! the HTTP and PostgreSQL layers are thin collaborators around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_matching_score, filter_applications, normalize, Scorer, TextField};
pub use crate::models::{Application, ApplicationStatus, ListFilter, Resume, SortDirection};
