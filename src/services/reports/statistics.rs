use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use super::aggregate::average_score;
use crate::models::reports::responses::{OrgStatistics, OrgStatisticsResponse};
use crate::models::{ApiResponse, users::entities::UserRole};

// 原接口保留的常量字段，没有任何写入路径
const TOTAL_HOURS_PLACEHOLDER: i64 = 50;

pub async fn get_statistics(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result: crate::errors::Result<OrgStatistics> = async {
        let total_employees = storage.count_users_by_role(UserRole::Employee).await?;
        let total_courses = storage.count_courses().await?;

        let scores: Vec<i32> = storage
            .list_quiz_results()
            .await?
            .iter()
            .map(|q| q.score)
            .collect();

        Ok(OrgStatistics {
            total_employees,
            total_hours: TOTAL_HOURS_PLACEHOLDER,
            total_courses,
            average_quiz_score: average_score(&scores),
        })
    }
    .await;

    match result {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(OrgStatisticsResponse { data }))),
        Err(e) => {
            tracing::error!("Error fetching statistics: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(format!("Failed to fetch statistics: {e}"))))
        }
    }
}
