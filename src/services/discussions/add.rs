use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DiscussionService;
use crate::models::{
    ApiResponse,
    discussions::{requests::NewDiscussionRequest, responses::DiscussionResponse},
};

pub async fn add_message(
    service: &DiscussionService,
    message_data: NewDiscussionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let message = message_data.message.trim();
    if message.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty("Message is required")));
    }

    let storage = service.get_storage(request);

    match storage.create_discussion(message_data.user_id, message).await {
        Ok(discussion) => Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
            DiscussionResponse { data: discussion },
            "Discussion message added successfully.",
        ))),
        Err(e) => {
            error!("Error adding discussion message: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(format!(
                "Failed to add discussion message: {e}"
            ))))
        }
    }
}
