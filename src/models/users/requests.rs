use serde::Deserialize;

// 创建用户请求（department/team 为目录实体 ID，与原接口字段名一致）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub department: i64,
    pub team: i64,
}
