use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, Responder};

use crate::models::ErrorResponse;
use crate::routes::applications::AppState;
use crate::services::HiringCafeError;

/// Configure search proxy routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/hiringcafe/fetch", web::post().to(fetch_jobs));
}

/// Forward a search payload to the hiring.cafe search API
///
/// POST /api/hiringcafe/fetch
///
/// When a proxy auth token is configured, callers must present it in the
/// X-Auth header. The upstream JSON is returned as-is.
async fn fetch_jobs(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: web::Json<serde_json::Value>,
) -> impl Responder {
    if let Some(expected) = &state.proxy_auth_token {
        let provided = req
            .headers()
            .get("X-Auth")
            .and_then(|value| value.to_str().ok());

        if provided != Some(expected.as_str()) {
            return HttpResponse::Unauthorized().json(ErrorResponse {
                error: "Unauthorized".to_string(),
                message: "Invalid or missing X-Auth token".to_string(),
                status_code: 401,
            });
        }
    }

    match state.hiring_cafe.search_jobs(&payload).await {
        Ok(results) => HttpResponse::Ok().json(results),
        Err(HiringCafeError::UpstreamError { status, body }) => {
            tracing::warn!("hiring.cafe upstream returned {}: {}", status, body);
            HttpResponse::build(
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            )
            .json(ErrorResponse {
                error: "Upstream hiring.cafe call failed".to_string(),
                message: body,
                status_code: status,
            })
        }
        Err(e) => {
            tracing::error!("hiring.cafe proxy failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Proxy request failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
