use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AuthService;
use crate::models::{
    ApiResponse,
    users::{entities::UserRole, requests::CreateUserRequest},
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_username};

pub async fn register_user(
    service: &AuthService,
    mut user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 验证用户名
    if let Err(msg) = validate_username(&user_data.username) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(msg)));
    }

    // 验证邮箱
    if let Err(msg) = validate_email(&user_data.email) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(msg)));
    }

    // 验证密码策略
    if let Err(msg) = validate_password_simple(&user_data.password) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(msg)));
    }

    let storage = service.get_storage(request);

    // 邮箱唯一
    match storage.get_user_by_email(&user_data.email).await {
        Ok(Some(_)) => {
            return Ok(
                HttpResponse::Conflict().json(ApiResponse::error_empty("User already exists"))
            );
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(format!("Failed to create user: {e}"))));
        }
    }

    // 部门与团队必须已存在
    match storage.get_department_by_id(user_data.department).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(
                HttpResponse::NotFound().json(ApiResponse::error_empty("Department not found"))
            );
        }
        Err(e) => {
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(format!("Failed to create user: {e}"))));
        }
    }

    match storage.get_team_by_id(user_data.team).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty("Team not found")));
        }
        Err(e) => {
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(format!("Failed to create user: {e}"))));
        }
    }

    // 哈希密码后落库；凭证只以哈希形式存储
    user_data.password = match hash_password(&user_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                format!("Password hashing failed: {e}"),
            )));
        }
    };

    // 新建账号默认员工角色
    match storage.create_user(user_data, UserRole::Employee).await {
        Ok(user) => {
            tracing::info!("User {} created (ID: {})", user.username, user.id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success_empty("User created successfully")))
        }
        Err(e) => {
            let msg = format!("User creation failed: {e}");
            error!("{}", msg);
            // 判断是否唯一约束冲突
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict()
                    .json(ApiResponse::error_empty("Email already exists")))
            } else {
                Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(msg)))
            }
        }
    }
}
