use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::DiscussionService;
use crate::models::ApiResponse;
use crate::models::discussions::{
    entities::CourseDiscussionWithAuthor, responses::CourseDiscussionListResponse,
};

pub async fn list_course_messages(
    service: &DiscussionService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result: crate::errors::Result<Vec<CourseDiscussionWithAuthor>> = async {
        let discussions = storage.list_course_discussions(course_id).await?;

        let mut username_cache: HashMap<i64, Option<String>> = HashMap::new();
        let mut messages = Vec::with_capacity(discussions.len());
        for discussion in discussions {
            let name = match username_cache.get(&discussion.user_id) {
                Some(cached) => cached.clone(),
                None => {
                    let fetched = storage
                        .get_user_by_id(discussion.user_id)
                        .await?
                        .map(|u| u.username);
                    username_cache.insert(discussion.user_id, fetched.clone());
                    fetched
                }
            };
            if let Some(username) = name {
                messages.push(CourseDiscussionWithAuthor {
                    discussion,
                    username,
                });
            }
        }
        Ok(messages)
    }
    .await;

    match result {
        // 空列表沿用原接口语义：success=false 加提示，但载荷仍是空数组
        Ok(discussions) if discussions.is_empty() => {
            Ok(HttpResponse::Ok().json(ApiResponse::failure_with_data(
                CourseDiscussionListResponse { discussions },
                "No discussions found for this course.",
            )))
        }
        Ok(discussions) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CourseDiscussionListResponse { discussions },
        ))),
        Err(e) => Ok(HttpResponse::InternalServerError()
            .json(ApiResponse::error_empty(format!("Server error: {e}")))),
    }
}
