use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::FeedbackService;
use crate::models::{ApiResponse, feedbacks::requests::SubmitFeedbackRequest};

pub async fn submit_feedback(
    service: &FeedbackService,
    feedback_data: SubmitFeedbackRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if feedback_data.feedback_text.trim().is_empty() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty("Feedback text is required")));
    }

    let storage = service.get_storage(request);

    match storage.create_feedback(feedback_data).await {
        Ok(_) => Ok(HttpResponse::Created()
            .json(ApiResponse::success_empty("Feedback submitted successfully"))),
        Err(e) => {
            error!("Failed to submit feedback: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(format!("Failed to submit feedback: {e}"))))
        }
    }
}
