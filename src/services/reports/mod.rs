pub mod aggregate;
pub mod statistics;
pub mod top_performers;
pub mod user_statistics;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct ReportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportService {
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

    // 全组织统计
    pub async fn statistics(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        statistics::get_statistics(self, request).await
    }

    // 最高分榜
    pub async fn top_performers(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        top_performers::get_top_performers(self, request).await
    }

    // 逐用户统计
    pub async fn user_statistics(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        user_statistics::get_all_user_statistics(self, request).await
    }
}
