use serde::Serialize;

use super::entities::User;

// 单用户载荷
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}
