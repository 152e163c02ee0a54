use serde::{Deserialize, Serialize};

// 全局讨论留言
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discussion {
    pub id: i64,
    pub user_id: i64,
    pub message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 课程讨论留言
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDiscussion {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 全局讨论留言，附作者用户名
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionWithAuthor {
    #[serde(flatten)]
    pub discussion: Discussion,
    pub username: String,
}

// 课程讨论留言，附作者用户名
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDiscussionWithAuthor {
    #[serde(flatten)]
    pub discussion: CourseDiscussion,
    pub username: String,
}
