use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::models::{
    ApiResponse,
    enrollments::{
        entities::EnrollmentStatus,
        requests::UpdateProgressRequest,
        responses::EnrollmentResponse,
    },
};

/// 进度到 100 即视为完成，否则回到进行中
pub(crate) fn status_for_progress(progress_percentage: i32) -> EnrollmentStatus {
    if progress_percentage >= 100 {
        EnrollmentStatus::Completed
    } else {
        EnrollmentStatus::OnGoing
    }
}

pub async fn update_progress(
    service: &EnrollmentService,
    update_request: UpdateProgressRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 进度不在应用层做区间裁剪，区间约束由表结构的 CHECK 承担
    let status = status_for_progress(update_request.progress_percentage);

    match storage
        .update_enrollment_progress(
            update_request.enrollment_id,
            update_request.progress_percentage,
            status,
        )
        .await
    {
        Ok(Some(enrollment)) => Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
            EnrollmentResponse { enrollment },
            "Progress updated successfully",
        ))),
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("Enrollment not found.")))
        }
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            format!("Failed to update progress: {e}"),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_100_completes() {
        assert_eq!(status_for_progress(100), EnrollmentStatus::Completed);
    }

    #[test]
    fn test_partial_progress_stays_ongoing() {
        assert_eq!(status_for_progress(0), EnrollmentStatus::OnGoing);
        assert_eq!(status_for_progress(50), EnrollmentStatus::OnGoing);
        assert_eq!(status_for_progress(99), EnrollmentStatus::OnGoing);
    }

    #[test]
    fn test_lowering_progress_reverts_status() {
        // 重复以相同值调用得到相同状态；回退进度也回退状态
        assert_eq!(status_for_progress(100), EnrollmentStatus::Completed);
        assert_eq!(status_for_progress(40), EnrollmentStatus::OnGoing);
    }
}
