use serde::{Deserialize, Serialize};

// 课程实体。`deadline` 是报名窗口的天数，不是绝对日期；
// 选课时由调用方换算成绝对的 deadlineDate。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    #[serde(rename = "deadline")]
    pub deadline_days: i32,
    pub video_url: String,
    pub rating: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
