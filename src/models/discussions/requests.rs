use serde::Deserialize;

// 新增全局讨论留言
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDiscussionRequest {
    pub user_id: i64,
    pub message: String,
}

// 新增课程讨论留言
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourseDiscussionRequest {
    pub user_id: i64,
    pub course_id: i64,
    pub message: String,
}
