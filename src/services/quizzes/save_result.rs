use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::QuizService;
use crate::models::{ApiResponse, quizzes::requests::SaveQuizResultRequest};

pub async fn save_quiz_result(
    service: &QuizService,
    result_data: SaveQuizResultRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 只追加成绩，不触碰选课进度和状态；
    // 测验完成与课程进度由前端各自上报
    match storage
        .create_quiz_result(
            result_data.user_id,
            result_data.course_id,
            result_data.score,
        )
        .await
    {
        Ok(_) => Ok(HttpResponse::Created()
            .json(ApiResponse::success_empty("Quiz score saved successfully"))),
        Err(e) => {
            error!("Failed to save quiz score: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(format!("Failed to save quiz score: {e}"))))
        }
    }
}
