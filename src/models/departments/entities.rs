use serde::{Deserialize, Serialize};

// 部门实体
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 团队实体（隶属于一个部门）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub department_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 部门及其下属团队
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentWithTeams {
    #[serde(flatten)]
    pub department: Department,
    pub teams: Vec<Team>,
}
