//! 演示数据填充
//!
//! 为演示环境准备示例课程和一批带随机选课、留言、测验成绩的员工账号。

pub mod courses;
pub mod data;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct SeedService {
    storage: Option<Arc<dyn Storage>>,
}

impl SeedService {
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

    // 插入示例课程
    pub async fn seed_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        courses::seed_courses(self, request).await
    }

    // 插入示例用户及其选课/留言/成绩
    pub async fn seed_data(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        data::seed_data(self, request).await
    }
}
