use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::Scorer;
use crate::models::{ErrorResponse, ResumeInfo, ResumeUploadQuery};
use crate::routes::applications::AppState;

/// Configure resume routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/resume", web::post().to(upload_resume))
        .route("/resume", web::get().to(get_resume));
}

/// Upload a new resume
///
/// POST /api/resume?filename=resume.txt
///
/// The raw request body is the resume document. Bodies that are not valid
/// UTF-8 are rejected here, before any scoring happens. Storing the resume
/// and rescoring every posting run in one transaction.
async fn upload_resume(
    state: web::Data<AppState>,
    query: web::Query<ResumeUploadQuery>,
    body: web::Bytes,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let text_content = match std::str::from_utf8(&body) {
        Ok(text) => text,
        Err(_) => {
            tracing::info!("Rejected non-UTF-8 resume upload: {}", query.filename);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid resume".to_string(),
                message: "Resume must be a UTF-8 text file".to_string(),
                status_code: 400,
            });
        }
    };

    let scorer = Scorer::new(Some(text_content));

    match state
        .store
        .store_resume(&query.filename, &body, text_content, &scorer)
        .await
    {
        Ok(resume) => HttpResponse::Ok().json(ResumeInfo {
            id: resume.id,
            filename: resume.filename,
            uploaded_at: resume.uploaded_at,
        }),
        Err(e) => {
            tracing::error!("Failed to store resume: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to store resume".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Metadata of the current resume, or JSON null when none was uploaded
///
/// GET /api/resume
async fn get_resume(state: web::Data<AppState>) -> impl Responder {
    match state.store.get_current_resume().await {
        Ok(Some(resume)) => HttpResponse::Ok().json(ResumeInfo {
            id: resume.id,
            filename: resume.filename,
            uploaded_at: resume.uploaded_at,
        }),
        Ok(None) => HttpResponse::Ok().json(serde_json::Value::Null),
        Err(e) => {
            tracing::error!("Failed to fetch current resume: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch current resume".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
