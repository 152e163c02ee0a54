use serde::Deserialize;

// 保存测验成绩请求
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveQuizResultRequest {
    pub user_id: i64,
    pub course_id: i64,
    pub score: i32,
}
