// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Application, ApplicationStatus, ListFilter, Resume, SortDirection};
pub use requests::{ApplicationPayload, ListApplicationsQuery, ResumeUploadQuery};
pub use responses::{CompanyEntry, ErrorResponse, HealthResponse, ResumeInfo};
