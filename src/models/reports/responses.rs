use serde::Serialize;

// 最高分榜条目：用户按其单次最高分排名
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopScorer {
    pub name: String,
    pub total_score: i32,
}

// 全组织统计。totalHours 是原接口保留的常量字段，无消费方。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgStatistics {
    pub total_employees: u64,
    pub total_hours: i64,
    pub total_courses: u64,
    pub average_quiz_score: f64,
}

// 单用户统计行。totalTime 无任何写入路径，始终为 0；
// averageQuizScore 按原接口格式化为两位小数的字符串。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatisticsRow {
    pub id: usize,
    pub name: String,
    pub department: String,
    pub team: String,
    pub courses_completed: u64,
    pub total_time: i64,
    pub average_quiz_score: String,
}

// {success, data} 载荷
#[derive(Debug, Serialize)]
pub struct OrgStatisticsResponse {
    pub data: OrgStatistics,
}

#[derive(Debug, Serialize)]
pub struct TopPerformersResponse {
    pub data: Vec<TopScorer>,
}

#[derive(Debug, Serialize)]
pub struct UserStatisticsResponse {
    pub data: Vec<UserStatisticsRow>,
}
