use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SeedService;
use crate::models::{
    ApiResponse,
    courses::{entities::Course, requests::CreateCourseRequest, responses::CourseListResponse},
};

const DEMO_THUMBNAIL: &str = "https://img.youtube.com/vi/toSAAgLUHuk/hqdefault.jpg";
const DEMO_VIDEO_URL: &str = "https://www.youtube.com/watch?v=toSAAgLUHuk";

pub async fn seed_courses(
    service: &SeedService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result: crate::errors::Result<Vec<Course>> = async {
        let mut created = Vec::new();
        for index in 1..=6 {
            let course = storage
                .create_course(CreateCourseRequest {
                    title: format!("Course Title {index}"),
                    description: format!("Short description for course {index}."),
                    thumbnail: DEMO_THUMBNAIL.to_string(),
                    deadline_days: index,
                    video_url: DEMO_VIDEO_URL.to_string(),
                })
                .await?;
            created.push(course);
        }
        Ok(created)
    }
    .await;

    match result {
        Ok(courses) => Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
            CourseListResponse { courses },
            "Dummy courses created successfully",
        ))),
        Err(e) => {
            error!("Failed to seed courses: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(format!(
                "Failed to create dummy courses: {e}"
            ))))
        }
    }
}
