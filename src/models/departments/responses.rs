use serde::Serialize;

use super::entities::DepartmentWithTeams;

// 部门列表（含团队）载荷
#[derive(Debug, Serialize)]
pub struct DepartmentListResponse {
    pub departments: Vec<DepartmentWithTeams>,
}
