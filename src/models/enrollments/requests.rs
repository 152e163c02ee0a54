use serde::Deserialize;

// 选课请求。deadlineDate 为绝对时间，由调用方按
// now + course.deadline 天计算后传入。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub user_id: i64,
    pub course_id: i64,
    pub deadline_date: chrono::DateTime<chrono::Utc>,
}

// 更新进度请求
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressRequest {
    pub enrollment_id: i64,
    pub progress_percentage: i32,
}

// 查询某用户在某课程上的选课记录
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentQuery {
    pub user_id: i64,
    pub course_id: i64,
}
