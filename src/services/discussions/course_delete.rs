use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DiscussionService;
use crate::models::ApiResponse;

pub async fn delete_course_message(
    service: &DiscussionService,
    message_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_course_discussion(message_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Discussion deleted successfully."))),
        Ok(false) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("Discussion not found.")))
        }
        Err(e) => {
            error!("Failed to delete course discussion: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(format!("Failed to delete discussion: {e}"))))
        }
    }
}
