use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DepartmentService;
use crate::models::{ApiResponse, departments::requests::CreateDepartmentRequest};

pub async fn create_department(
    service: &DepartmentService,
    department_data: CreateDepartmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let name = department_data.name.trim();
    if name.is_empty() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty("Department name is required")));
    }

    let storage = service.get_storage(request);

    // 部门名称唯一
    match storage.get_department_by_name(name).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict()
                .json(ApiResponse::error_empty("Department already exists")));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                format!("Failed to create department: {e}"),
            )));
        }
    }

    match storage.create_department(name).await {
        Ok(department) => {
            tracing::info!("Department {} created (ID: {})", department.name, department.id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success_empty("Department created successfully")))
        }
        Err(e) => {
            error!("Department creation failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(format!(
                "Failed to create department: {e}"
            ))))
        }
    }
}
