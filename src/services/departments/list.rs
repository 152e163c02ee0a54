use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DepartmentService;
use crate::models::ApiResponse;
use crate::models::departments::{
    entities::DepartmentWithTeams, responses::DepartmentListResponse,
};

pub async fn list_departments(
    service: &DepartmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result: crate::errors::Result<Vec<DepartmentWithTeams>> = async {
        let departments = storage.list_departments().await?;

        let mut departments_with_teams = Vec::with_capacity(departments.len());
        for department in departments {
            let teams = storage.list_teams_by_department(department.id).await?;
            departments_with_teams.push(DepartmentWithTeams { department, teams });
        }
        Ok(departments_with_teams)
    }
    .await;

    match result {
        Ok(departments) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DepartmentListResponse { departments },
        ))),
        Err(e) => Ok(HttpResponse::InternalServerError()
            .json(ApiResponse::error_empty(format!("Failed to get departments: {e}")))),
    }
}
