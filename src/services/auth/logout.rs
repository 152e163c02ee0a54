use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::utils::jwt::JwtUtils;

use super::AuthService;

pub async fn handle_logout(
    _service: &AuthService,
    _request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 令牌是无状态的，登出只需作废 refresh cookie
    let cookie = JwtUtils::create_logout_cookie();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(ApiResponse::success_empty("User logged out successfully")))
}
