use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, users::responses::UserResponse};

use super::AuthService;

pub async fn handle_profile(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // RequireJWT 已经把用户放进请求扩展
    match RequireJWT::extract_user(request) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse { user }))),
        None => {
            Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty("Unauthorized")))
        }
    }
}
