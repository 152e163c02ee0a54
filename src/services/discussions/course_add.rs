use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DiscussionService;
use crate::models::{
    ApiResponse,
    discussions::{requests::NewCourseDiscussionRequest, responses::CourseDiscussionResponse},
};

pub async fn add_course_message(
    service: &DiscussionService,
    message_data: NewCourseDiscussionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let message = message_data.message.trim();
    if message.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            "Message, userId, and courseId are required.",
        )));
    }

    let storage = service.get_storage(request);

    match storage
        .create_course_discussion(message_data.user_id, message_data.course_id, message)
        .await
    {
        Ok(discussion) => Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
            CourseDiscussionResponse { discussion },
            "Discussion added successfully",
        ))),
        Err(e) => {
            error!("Failed to add course discussion: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(format!("Failed to add discussion: {e}"))))
        }
    }
}
