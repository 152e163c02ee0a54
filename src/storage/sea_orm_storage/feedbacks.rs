use super::SeaOrmStorage;
use crate::entity::feedbacks::ActiveModel;
use crate::errors::{LMSystemError, Result};
use crate::models::feedbacks::{entities::Feedback, requests::SubmitFeedbackRequest};
use sea_orm::{ActiveModelTrait, Set};

impl SeaOrmStorage {
    /// 保存课程反馈（只写路径，没有读取方）
    pub async fn create_feedback_impl(&self, req: SubmitFeedbackRequest) -> Result<Feedback> {
        let model = ActiveModel {
            user_id: Set(req.user_id),
            course_id: Set(req.course_id),
            rating: Set(req.rating),
            feedback_text: Set(req.feedback_text),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("保存课程反馈失败: {e}")))?;

        Ok(result.into_feedback())
    }
}
