use serde::Deserialize;

// 提交课程反馈请求
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackRequest {
    pub user_id: i64,
    pub course_id: i64,
    pub rating: i32,
    pub feedback_text: String,
}
