use serde::Deserialize;

// 创建课程请求（rating 初始为 0，不由创建方提供）
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    #[serde(rename = "deadline")]
    pub deadline_days: i32,
    pub video_url: String,
}
