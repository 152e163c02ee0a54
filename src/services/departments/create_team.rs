use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DepartmentService;
use crate::models::{ApiResponse, departments::requests::CreateTeamRequest};

pub async fn create_team(
    service: &DepartmentService,
    department_id: i64,
    team_data: CreateTeamRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let name = team_data.name.trim();
    if name.is_empty() {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty("Team name is required"))
        );
    }

    let storage = service.get_storage(request);

    // 所属部门必须存在
    match storage.get_department_by_id(department_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(
                HttpResponse::NotFound().json(ApiResponse::error_empty("Department not found"))
            );
        }
        Err(e) => {
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(format!("Failed to create team: {e}"))));
        }
    }

    match storage.create_team(department_id, name).await {
        Ok(team) => {
            tracing::info!("Team {} created (ID: {})", team.name, team.id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success_empty("Team created successfully")))
        }
        Err(e) => {
            error!("Team creation failed: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(format!("Failed to create team: {e}"))))
        }
    }
}
