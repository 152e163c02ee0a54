use serde::{Deserialize, Serialize};

// 课程反馈（只写不读）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub rating: i32,
    pub feedback_text: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
