use super::SeaOrmStorage;
use crate::entity::departments::{
    ActiveModel as DepartmentActiveModel, Column as DepartmentColumn, Entity as Departments,
};
use crate::entity::teams::{ActiveModel as TeamActiveModel, Column as TeamColumn, Entity as Teams};
use crate::errors::{LMSystemError, Result};
use crate::models::departments::entities::{Department, Team};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建部门
    pub async fn create_department_impl(&self, name: &str) -> Result<Department> {
        let model = DepartmentActiveModel {
            name: Set(name.to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("创建部门失败: {e}")))?;

        Ok(result.into_department())
    }

    /// 通过 ID 获取部门
    pub async fn get_department_by_id_impl(&self, id: i64) -> Result<Option<Department>> {
        let result = Departments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询部门失败: {e}")))?;

        Ok(result.map(|m| m.into_department()))
    }

    /// 通过名称获取部门
    pub async fn get_department_by_name_impl(&self, name: &str) -> Result<Option<Department>> {
        let result = Departments::find()
            .filter(DepartmentColumn::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询部门失败: {e}")))?;

        Ok(result.map(|m| m.into_department()))
    }

    /// 列出全部部门
    pub async fn list_departments_impl(&self) -> Result<Vec<Department>> {
        let result = Departments::find()
            .order_by_asc(DepartmentColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询部门列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_department()).collect())
    }

    /// 在部门下创建团队
    pub async fn create_team_impl(&self, department_id: i64, name: &str) -> Result<Team> {
        let model = TeamActiveModel {
            name: Set(name.to_string()),
            department_id: Set(department_id),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("创建团队失败: {e}")))?;

        Ok(result.into_team())
    }

    /// 通过 ID 获取团队
    pub async fn get_team_by_id_impl(&self, id: i64) -> Result<Option<Team>> {
        let result = Teams::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询团队失败: {e}")))?;

        Ok(result.map(|m| m.into_team()))
    }

    /// 列出部门下的团队
    pub async fn list_teams_by_department_impl(&self, department_id: i64) -> Result<Vec<Team>> {
        let result = Teams::find()
            .filter(TeamColumn::DepartmentId.eq(department_id))
            .order_by_asc(TeamColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询团队列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_team()).collect())
    }
}
