//! 业务数据模型
//!
//! 按领域划分：每个领域目录下分 entities / requests / responses。
//! 对外 JSON 一律 camelCase，响应统一走 `ApiResponse` 信封。

pub mod common;

pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod departments;
pub mod discussions;
pub mod enrollments;
pub mod feedbacks;
pub mod quizzes;
pub mod reports;
pub mod system;
pub mod users;

pub use common::response::ApiResponse;

/// 程序启动时间，用于系统状态上报
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
