use super::SeaOrmStorage;
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::errors::{LMSystemError, Result};
use crate::models::enrollments::entities::{Enrollment, EnrollmentStatus};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建选课记录。status=on-going，progress=0，enrollmentDate=now；
    /// deadlineDate 为调用方换算好的绝对时间。
    pub async fn create_enrollment_impl(
        &self,
        user_id: i64,
        course_id: i64,
        deadline_date: chrono::DateTime<chrono::Utc>,
    ) -> Result<Enrollment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            course_id: Set(course_id),
            enrollment_date: Set(now),
            status: Set(EnrollmentStatus::OnGoing.to_string()),
            progress_percentage: Set(0),
            deadline_date: Set(deadline_date.timestamp()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("创建选课记录失败: {e}")))?;

        Ok(result.into_enrollment())
    }

    /// 通过 ID 获取选课记录
    pub async fn get_enrollment_by_id_impl(&self, id: i64) -> Result<Option<Enrollment>> {
        let result = Enrollments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 获取用户在某课程上的第一条选课记录
    pub async fn find_enrollment_impl(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 列出用户全部选课记录，按选课时间倒序
    pub async fn list_enrollments_for_user_impl(&self, user_id: i64) -> Result<Vec<Enrollment>> {
        let result = Enrollments::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::EnrollmentDate)
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询选课列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_enrollment()).collect())
    }

    /// 覆写进度与状态。并发调用在行级以后写为准，不加额外保护。
    pub async fn update_enrollment_progress_impl(
        &self,
        id: i64,
        progress_percentage: i32,
        status: EnrollmentStatus,
    ) -> Result<Option<Enrollment>> {
        // 先检查记录是否存在
        let existing = self.get_enrollment_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            progress_percentage: Set(progress_percentage),
            status: Set(status.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("更新进度失败: {e}")))?;

        self.get_enrollment_by_id_impl(id).await
    }

    /// 统计用户已完成的选课数量
    pub async fn count_completed_enrollments_impl(&self, user_id: i64) -> Result<u64> {
        let count = Enrollments::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Status.eq(EnrollmentStatus::Completed.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("统计选课数量失败: {e}")))?;

        Ok(count)
    }
}
