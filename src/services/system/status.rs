use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SystemService;
use crate::models::{ApiResponse, AppStartTime, system::responses::SystemStatusResponse};

pub async fn get_status(
    _service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let started_at = request
        .app_data::<actix_web::web::Data<AppStartTime>>()
        .map(|t| t.start_datetime)
        .unwrap_or_else(chrono::Utc::now);

    let response = SystemStatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        started_at,
        uptime_seconds: chrono::Utc::now()
            .signed_duration_since(started_at)
            .num_seconds(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}
