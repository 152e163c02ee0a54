use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use super::aggregate::top_scores_by_user;
use crate::models::ApiResponse;
use crate::models::reports::responses::{TopPerformersResponse, TopScorer};

const TOP_PERFORMER_LIMIT: usize = 5;

pub async fn get_top_performers(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result: crate::errors::Result<Vec<TopScorer>> = async {
        let results = storage.list_quiz_results().await?;

        let mut top_scorers = Vec::new();
        for (user_id, total_score) in top_scores_by_user(&results, TOP_PERFORMER_LIMIT) {
            // 用户已不存在的成绩跳过
            if let Some(user) = storage.get_user_by_id(user_id).await? {
                top_scorers.push(TopScorer {
                    name: user.username,
                    total_score,
                });
            }
        }
        Ok(top_scorers)
    }
    .await;

    match result {
        Ok(data) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(TopPerformersResponse { data })))
        }
        Err(e) => {
            tracing::error!("Error fetching top performers: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(format!(
                "Failed to fetch top performers: {e}"
            ))))
        }
    }
}
