use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::{
    ApiResponse,
    courses::{requests::CreateCourseRequest, responses::CourseResponse},
};

pub async fn create_course(
    service: &CourseService,
    course_data: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if course_data.title.trim().is_empty() {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty("Course title is required"))
        );
    }

    if course_data.deadline_days <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            "Course deadline must be a positive number of days",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_course(course_data).await {
        Ok(course) => {
            tracing::info!("Course {} created (ID: {})", course.title, course.id);
            Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
                CourseResponse { course },
                "Course created successfully",
            )))
        }
        Err(e) => {
            error!("Course creation failed: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(format!("Failed to create course: {e}"))))
        }
    }
}
