use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DiscussionService;
use crate::models::{ApiResponse, discussions::responses::DiscussionResponse};

pub async fn delete_message(
    service: &DiscussionService,
    message_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_discussion(message_id).await {
        Ok(Some(deleted)) => Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
            DiscussionResponse { data: deleted },
            "Discussion message deleted successfully.",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty("Discussion message not found."))),
        Err(e) => {
            error!("Error deleting discussion message: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(format!(
                "Failed to delete discussion message: {e}"
            ))))
        }
    }
}
