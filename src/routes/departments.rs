use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::departments::requests::{CreateDepartmentRequest, CreateTeamRequest};
use crate::models::users::entities::UserRole;
use crate::services::DepartmentService;
use crate::utils::SafeDepartmentIdI64;

// 懒加载的全局 DepartmentService 实例
static DEPARTMENT_SERVICE: Lazy<DepartmentService> = Lazy::new(DepartmentService::new_lazy);

// HTTP处理程序
pub async fn list_departments(req: HttpRequest) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE.list_departments(&req).await
}

pub async fn create_department(
    req: HttpRequest,
    department_data: web::Json<CreateDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .create_department(department_data.into_inner(), &req)
        .await
}

pub async fn create_team(
    req: HttpRequest,
    department_id: SafeDepartmentIdI64,
    team_data: web::Json<CreateTeamRequest>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .create_team(department_id.0, team_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_department_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/departments")
            .service(
                web::resource("")
                    .wrap(middlewares::RequireJWT)
                    .route(web::get().to(list_departments)),
            )
            // 管理员端点（RequireJWT 在外层先执行）
            .service(
                web::resource("/createDepartment")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route(web::post().to(create_department)),
            )
            .service(
                web::resource("/{departmentId}/createTeam")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route(web::post().to(create_team)),
            ),
    );
}
