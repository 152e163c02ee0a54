use super::SeaOrmStorage;
use crate::entity::course_discussions::{
    ActiveModel as CourseDiscussionActiveModel, Column as CourseDiscussionColumn,
    Entity as CourseDiscussions,
};
use crate::entity::discussions::{
    ActiveModel as DiscussionActiveModel, Column as DiscussionColumn, Entity as Discussions,
};
use crate::errors::{LMSystemError, Result};
use crate::models::discussions::entities::{CourseDiscussion, Discussion};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 新增全局留言
    pub async fn create_discussion_impl(&self, user_id: i64, message: &str) -> Result<Discussion> {
        let model = DiscussionActiveModel {
            user_id: Set(user_id),
            message: Set(message.to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("新增留言失败: {e}")))?;

        Ok(result.into_discussion())
    }

    /// 列出全部全局留言，按时间倒序
    pub async fn list_discussions_impl(&self) -> Result<Vec<Discussion>> {
        let result = Discussions::find()
            .order_by_desc(DiscussionColumn::CreatedAt)
            .order_by_desc(DiscussionColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询留言列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_discussion()).collect())
    }

    /// 删除全局留言，返回被删除的记录
    pub async fn delete_discussion_impl(&self, id: i64) -> Result<Option<Discussion>> {
        let existing = Discussions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询留言失败: {e}")))?;

        let Some(found) = existing else {
            return Ok(None);
        };

        Discussions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("删除留言失败: {e}")))?;

        Ok(Some(found.into_discussion()))
    }

    /// 新增课程留言
    pub async fn create_course_discussion_impl(
        &self,
        user_id: i64,
        course_id: i64,
        message: &str,
    ) -> Result<CourseDiscussion> {
        let model = CourseDiscussionActiveModel {
            user_id: Set(user_id),
            course_id: Set(course_id),
            message: Set(message.to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("新增课程留言失败: {e}")))?;

        Ok(result.into_course_discussion())
    }

    /// 列出课程留言，按时间倒序
    pub async fn list_course_discussions_impl(
        &self,
        course_id: i64,
    ) -> Result<Vec<CourseDiscussion>> {
        let result = CourseDiscussions::find()
            .filter(CourseDiscussionColumn::CourseId.eq(course_id))
            .order_by_desc(CourseDiscussionColumn::CreatedAt)
            .order_by_desc(CourseDiscussionColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询课程留言失败: {e}")))?;

        Ok(result
            .into_iter()
            .map(|m| m.into_course_discussion())
            .collect())
    }

    /// 删除课程留言
    pub async fn delete_course_discussion_impl(&self, id: i64) -> Result<bool> {
        let result = CourseDiscussions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("删除课程留言失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
