pub mod add;
pub mod course_add;
pub mod course_delete;
pub mod course_list;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::discussions::requests::{NewCourseDiscussionRequest, NewDiscussionRequest};
use crate::storage::Storage;

pub struct DiscussionService {
    storage: Option<Arc<dyn Storage>>,
}

impl DiscussionService {
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

    // 新增全局留言
    pub async fn add_message(
        &self,
        message_data: NewDiscussionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        add::add_message(self, message_data, request).await
    }

    // 列出全局留言
    pub async fn list_messages(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_messages(self, request).await
    }

    // 删除全局留言
    pub async fn delete_message(
        &self,
        message_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_message(self, message_id, request).await
    }

    // 新增课程留言
    pub async fn add_course_message(
        &self,
        message_data: NewCourseDiscussionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        course_add::add_course_message(self, message_data, request).await
    }

    // 列出课程留言
    pub async fn list_course_messages(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        course_list::list_course_messages(self, course_id, request).await
    }

    // 删除课程留言
    pub async fn delete_course_message(
        &self,
        message_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        course_delete::delete_course_message(self, message_id, request).await
    }
}
