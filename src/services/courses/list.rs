use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::{ApiResponse, courses::responses::CourseListResponse};

pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_courses().await {
        Ok(courses) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(CourseListResponse { courses }))),
        Err(e) => Ok(HttpResponse::InternalServerError()
            .json(ApiResponse::error_empty(format!("Failed to fetch courses: {e}")))),
    }
}
