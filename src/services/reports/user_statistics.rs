use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::ReportService;
use super::aggregate::{average_score, format_average};
use crate::models::ApiResponse;
use crate::models::reports::responses::{UserStatisticsResponse, UserStatisticsRow};

// 没有任何写入路径会填充学习时长，固定为 0
const TOTAL_TIME_PLACEHOLDER: i64 = 0;

pub async fn get_all_user_statistics(
    service: &ReportService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result: crate::errors::Result<Vec<UserStatisticsRow>> = async {
        let users = storage.list_users().await?;

        let mut department_names: HashMap<i64, String> = HashMap::new();
        let mut team_names: HashMap<i64, String> = HashMap::new();
        let mut rows = Vec::with_capacity(users.len());

        for (index, user) in users.into_iter().enumerate() {
            let courses_completed = storage.count_completed_enrollments(user.id).await?;

            let scores: Vec<i32> = storage
                .list_quiz_results_for_user(user.id)
                .await?
                .iter()
                .map(|q| q.score)
                .collect();

            let department = match department_names.get(&user.department_id) {
                Some(name) => name.clone(),
                None => {
                    let name = storage
                        .get_department_by_id(user.department_id)
                        .await?
                        .map(|d| d.name)
                        .unwrap_or_default();
                    department_names.insert(user.department_id, name.clone());
                    name
                }
            };

            let team = match team_names.get(&user.team_id) {
                Some(name) => name.clone(),
                None => {
                    let name = storage
                        .get_team_by_id(user.team_id)
                        .await?
                        .map(|t| t.name)
                        .unwrap_or_default();
                    team_names.insert(user.team_id, name.clone());
                    name
                }
            };

            rows.push(UserStatisticsRow {
                // 展示用序号，与原接口保持一致
                id: index + 1,
                name: user.username,
                department,
                team,
                courses_completed,
                total_time: TOTAL_TIME_PLACEHOLDER,
                average_quiz_score: format_average(average_score(&scores)),
            });
        }

        Ok(rows)
    }
    .await;

    match result {
        Ok(data) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(UserStatisticsResponse { data })))
        }
        Err(e) => {
            tracing::error!("Error fetching user statistics: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(format!(
                "Failed to fetch user statistics: {e}"
            ))))
        }
    }
}
