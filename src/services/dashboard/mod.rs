pub mod partition;
pub mod user_data;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct DashboardService {
    storage: Option<Arc<dyn Storage>>,
}

impl DashboardService {
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

    // 员工仪表盘数据：课程三分区 + 榜单 + 最近测验 + 讨论
    pub async fn user_data(&self, user_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        user_data::get_user_data(self, user_id, request).await
    }
}
