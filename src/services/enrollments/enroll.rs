use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EnrollmentService;
use crate::models::{
    ApiResponse,
    enrollments::{requests::EnrollRequest, responses::EnrollmentResponse},
};

/// 由报名窗口天数换算绝对截止时间
pub(crate) fn deadline_from_days(
    now: chrono::DateTime<chrono::Utc>,
    days: i32,
) -> chrono::DateTime<chrono::Utc> {
    now + chrono::Duration::days(i64::from(days))
}

pub async fn enroll_user(
    service: &EnrollmentService,
    enroll_request: EnrollRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 课程必须存在；缺失归为校验错误
    match storage.get_course_by_id(enroll_request.course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(
                HttpResponse::BadRequest().json(ApiResponse::error_empty("Course not found"))
            );
        }
        Err(e) => {
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                format!("Failed to enroll user in the course: {e}"),
            )));
        }
    }

    // (userId, courseId) 唯一性由选课引擎负责，重复选课返回 409
    match storage
        .find_enrollment(enroll_request.user_id, enroll_request.course_id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                "User is already enrolled in this course",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                format!("Failed to enroll user in the course: {e}"),
            )));
        }
    }

    match storage
        .create_enrollment(
            enroll_request.user_id,
            enroll_request.course_id,
            enroll_request.deadline_date,
        )
        .await
    {
        Ok(enrollment) => Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
            EnrollmentResponse { enrollment },
            "User enrolled in the course successfully",
        ))),
        Err(e) => {
            error!("Enrollment failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(format!(
                "Failed to enroll user in the course: {e}"
            ))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline_from_days() {
        let now = chrono::Utc::now();
        let deadline = deadline_from_days(now, 3);
        assert_eq!((deadline - now).num_days(), 3);
    }

    #[test]
    fn test_deadline_from_zero_days() {
        let now = chrono::Utc::now();
        assert_eq!(deadline_from_days(now, 0), now);
    }
}
