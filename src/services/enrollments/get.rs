use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::models::{
    ApiResponse,
    enrollments::{
        entities::EnrollmentWithCourse,
        requests::EnrollmentQuery,
        responses::EnrollmentDetailResponse,
    },
};

pub async fn get_enrollment(
    service: &EnrollmentService,
    query: EnrollmentQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 取第一条匹配的选课记录
    let enrollment = match storage.find_enrollment(query.user_id, query.course_id).await {
        Ok(Some(enrollment)) => enrollment,
        Ok(None) => {
            return Ok(
                HttpResponse::NotFound().json(ApiResponse::error_empty("Enrollment not found"))
            );
        }
        Err(e) => {
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(format!("Server error: {e}"))));
        }
    };

    // 联结完整课程数据
    match storage.get_course_by_id(enrollment.course_id).await {
        Ok(Some(course)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            EnrollmentDetailResponse {
                enrollment: EnrollmentWithCourse { enrollment, course },
            },
        ))),
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("Course not found")))
        }
        Err(e) => Ok(HttpResponse::InternalServerError()
            .json(ApiResponse::error_empty(format!("Server error: {e}")))),
    }
}
