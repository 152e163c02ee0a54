use serde::{Deserialize, Serialize};

// 测验成绩记录（一次作答一条）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub score: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 最近测验，附课程标题
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentQuiz {
    #[serde(flatten)]
    pub quiz: QuizResult,
    pub course_title: String,
}
