use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::DiscussionService;
use crate::models::ApiResponse;
use crate::models::discussions::{
    entities::DiscussionWithAuthor, responses::DiscussionListResponse,
};

pub async fn list_messages(
    service: &DiscussionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result: crate::errors::Result<Vec<DiscussionWithAuthor>> = async {
        let discussions = storage.list_discussions().await?;

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
                messages.push(DiscussionWithAuthor {
                    discussion,
                    username,
                });
            }
        }
        Ok(messages)
    }
    .await;

    match result {
        Ok(messages) => Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
            DiscussionListResponse { messages },
            "Discussions fetched successfully.",
        ))),
        Err(e) => {
            tracing::error!("Error fetching discussions: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(format!("Failed to fetch discussions: {e}"))))
        }
    }
}
