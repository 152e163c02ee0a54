use super::SeaOrmStorage;
use crate::entity::quiz_results::{ActiveModel, Column, Entity as QuizResults};
use crate::errors::{LMSystemError, Result};
use crate::models::quizzes::entities::QuizResult;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 追加一条测验成绩。不做唯一性约束，历史全部保留。
    pub async fn create_quiz_result_impl(
        &self,
        user_id: i64,
        course_id: i64,
        score: i32,
    ) -> Result<QuizResult> {
        let model = ActiveModel {
            user_id: Set(user_id),
            course_id: Set(course_id),
            score: Set(score),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("保存测验成绩失败: {e}")))?;

        Ok(result.into_quiz_result())
    }

    /// 列出全部测验成绩
    pub async fn list_quiz_results_impl(&self) -> Result<Vec<QuizResult>> {
        let result = QuizResults::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询测验成绩失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_quiz_result()).collect())
    }

    /// 列出用户全部测验成绩
    pub async fn list_quiz_results_for_user_impl(&self, user_id: i64) -> Result<Vec<QuizResult>> {
        let result = QuizResults::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询测验成绩失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_quiz_result()).collect())
    }

    /// 列出用户最近的测验成绩，按时间倒序取前 limit 条
    pub async fn list_recent_quiz_results_impl(
        &self,
        user_id: i64,
        limit: u64,
    ) -> Result<Vec<QuizResult>> {
        let result = QuizResults::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询测验成绩失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_quiz_result()).collect())
    }
}
