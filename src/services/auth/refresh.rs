use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, auth::responses::RefreshResponse};
use crate::utils::jwt::{JwtUtils, REFRESH_TOKEN_COOKIE};

use super::AuthService;

pub async fn handle_refresh(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    // 1. 从 cookie 中取 refresh token
    let Some(cookie) = request.cookie(REFRESH_TOKEN_COOKIE) else {
        return Ok(
            HttpResponse::Unauthorized().json(ApiResponse::error_empty("Missing refresh token"))
        );
    };

    // 2. 验证 refresh token
    let claims = match JwtUtils::verify_refresh_token(cookie.value()) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::info!("Refresh token validation failed: {}", e);
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty("Invalid refresh token")));
        }
    };

    let Ok(user_id) = claims.sub.parse::<i64>() else {
        return Ok(
            HttpResponse::Unauthorized().json(ApiResponse::error_empty("Invalid refresh token"))
        );
    };

    // 3. 用户必须仍然存在（每次回源查询，不走缓存）
    let storage = service.get_storage(request);
    let user = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(
                HttpResponse::Unauthorized().json(ApiResponse::error_empty("User not found"))
            );
        }
        Err(e) => {
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(format!("Token refresh failed: {e}"))));
        }
    };

    // 4. 签发新的 access token
    match user.generate_access_token() {
        Ok(access_token) => Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
            RefreshResponse {
                access_token,
                expires_in: config.jwt.access_token_expiry * 60,
            },
            "Token refreshed",
        ))),
        Err(e) => {
            tracing::error!("Failed to generate access token: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                "Token refresh failed, unable to generate token",
            )))
        }
    }
}
