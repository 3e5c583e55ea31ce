use actix_web::{web, HttpResponse, Responder};
use std::collections::HashSet;
use std::sync::Arc;
use validator::Validate;

use crate::core::{filter_applications, Scorer};
use crate::models::{
    ApplicationPayload, ErrorResponse, HealthResponse, ListApplicationsQuery, ListFilter,
    SortDirection,
};
use crate::services::{ApplicationStore, HiringCafeClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ApplicationStore>,
    pub hiring_cafe: Arc<HiringCafeClient>,
    pub proxy_auth_token: Option<String>,
}

/// Configure application-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/applications", web::get().to(list_applications))
        .route("/applications", web::post().to(upsert_applications))
        .route("/applications/keywords", web::get().to(list_keywords))
        .route("/applications/{id}/apply", web::post().to(mark_applied))
        .route("/companies", web::get().to(list_companies));
}

/// Health check endpoint
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List applications endpoint
///
/// GET /api/applications?status=&source=&timeframe=&keyword=&sort=
///
/// Boundary defaults live here, not in the core filter: a missing status
/// lists only not-yet-applied postings, and a missing sort means newest
/// first ("recent").
async fn list_applications(
    state: web::Data<AppState>,
    query: web::Query<ListApplicationsQuery>,
) -> impl Responder {
    let status = query
        .status
        .clone()
        .unwrap_or_else(|| "not_applied".to_string());

    let sort = query.sort.as_deref().unwrap_or("recent");
    // "recent" is the UI alias for newest-first
    let direction = match sort {
        "recent" => SortDirection::Desc,
        other => SortDirection::from_param(Some(other)),
    };

    let filter = ListFilter {
        status: Some(status),
        source: query.source.clone(),
        timeframe: query.timeframe.clone(),
        keyword: query.keyword.clone(),
        sort: direction,
    };

    match state.store.list_all().await {
        Ok(applications) => {
            let results = filter_applications(applications, &filter, chrono::Utc::now());
            tracing::debug!("Listing {} applications for {:?}", results.len(), filter);
            HttpResponse::Ok().json(results)
        }
        Err(e) => {
            tracing::error!("Failed to list applications: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to list applications".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Batch upsert endpoint for scraped postings
///
/// POST /api/applications
///
/// Accepts a JSON array of postings. Each stored row is scored against the
/// current resume; rescraping an existing job_id refreshes its fields and
/// score but never its status.
async fn upsert_applications(
    state: web::Data<AppState>,
    payload: web::Json<Vec<ApplicationPayload>>,
) -> impl Responder {
    for item in payload.iter() {
        if let Err(errors) = item.validate() {
            tracing::info!(
                "Validation failed for posting {:?}: {}",
                item.job_id,
                errors
            );
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Validation failed".to_string(),
                message: errors.to_string(),
                status_code: 400,
            });
        }
    }

    let resume = match state.store.get_current_resume().await {
        Ok(resume) => resume,
        Err(e) => {
            tracing::error!("Failed to fetch current resume: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch current resume".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let scorer = Scorer::new(resume.as_ref().map(|r| r.text_content.as_str()));

    match state.store.upsert_applications(payload.as_slice(), &scorer).await {
        Ok(stored) => {
            tracing::info!("Upserted {} applications", stored.len());
            HttpResponse::Ok().json(stored)
        }
        Err(e) => {
            tracing::error!("Failed to upsert applications: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to upsert applications".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Mark a posting as applied
///
/// POST /api/applications/{id}/apply
async fn mark_applied(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();

    match state.store.mark_applied(id).await {
        Ok(Some(application)) => {
            tracing::info!("Marked application {} as applied", id);
            HttpResponse::Ok().json(application)
        }
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Application not found".to_string(),
            message: format!("No application with id {}", id),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to mark application {} as applied: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to mark application as applied".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Distinct search keywords across all postings
///
/// GET /api/applications/keywords
async fn list_keywords(state: web::Data<AppState>) -> impl Responder {
    match state.store.list_search_keys().await {
        Ok(raw) => HttpResponse::Ok().json(collect_keywords(raw)),
        Err(e) => {
            tracing::error!("Failed to list keywords: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to list keywords".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Companies seen across all postings
///
/// GET /api/companies
async fn list_companies(state: web::Data<AppState>) -> impl Responder {
    match state.store.list_companies().await {
        Ok(companies) => HttpResponse::Ok().json(companies),
        Err(e) => {
            tracing::error!("Failed to list companies: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to list companies".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Split raw search keys on , and ;, dedupe case-insensitively keeping the
/// first-seen casing, and sort case-insensitively
fn collect_keywords(raw: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();

    for value in raw {
        for part in value.split([',', ';']) {
            let keyword = part.trim();
            if keyword.is_empty() {
                continue;
            }
            if seen.insert(keyword.to_lowercase()) {
                keywords.push(keyword.to_string());
            }
        }
    }

    keywords.sort_by_key(|keyword| keyword.to_lowercase());
    keywords
}
