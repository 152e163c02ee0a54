pub mod save_result;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::quizzes::requests::SaveQuizResultRequest;
use crate::storage::Storage;

pub struct QuizService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuizService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 保存一次测验成绩
    pub async fn save_result(
        &self,
        result_data: SaveQuizResultRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        save_result::save_quiz_result(self, result_data, request).await
    }
}
