use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::enrollments::requests::{EnrollRequest, EnrollmentQuery, UpdateProgressRequest};
use crate::models::feedbacks::requests::SubmitFeedbackRequest;
use crate::models::quizzes::requests::SaveQuizResultRequest;
use crate::models::users::entities::UserRole;
use crate::services::{CourseService, EnrollmentService, FeedbackService, QuizService, SeedService};

// 懒加载的全局服务实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);
static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);
static FEEDBACK_SERVICE: Lazy<FeedbackService> = Lazy::new(FeedbackService::new_lazy);
static QUIZ_SERVICE: Lazy<QuizService> = Lazy::new(QuizService::new_lazy);
static SEED_SERVICE: Lazy<SeedService> = Lazy::new(SeedService::new_lazy);

// HTTP处理程序
pub async fn list_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(course_data.into_inner(), &req)
        .await
}

pub async fn enroll(
    req: HttpRequest,
    enroll_data: web::Json<EnrollRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .enroll(enroll_data.into_inner(), &req)
        .await
}

pub async fn update_progress(
    req: HttpRequest,
    update_data: web::Json<UpdateProgressRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .update_progress(update_data.into_inner(), &req)
        .await
}

pub async fn get_enrollment(
    req: HttpRequest,
    query: web::Query<EnrollmentQuery>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .get_enrollment(query.into_inner(), &req)
        .await
}

pub async fn save_quiz_result(
    req: HttpRequest,
    result_data: web::Json<SaveQuizResultRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.save_result(result_data.into_inner(), &req).await
}

pub async fn submit_feedback(
    req: HttpRequest,
    feedback_data: web::Json<SubmitFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE
        .submit(feedback_data.into_inner(), &req)
        .await
}

pub async fn insert_dummy_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    SEED_SERVICE.seed_courses(&req).await
}

// 配置路由
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/courses")
            // 登录用户端点
            .service(
                web::resource("")
                    .wrap(middlewares::RequireJWT)
                    .route(web::get().to(list_courses)),
            )
            .service(
                web::resource("/enroll")
                    .wrap(middlewares::RequireJWT)
                    .route(web::post().to(enroll)),
            )
            .service(
                web::resource("/update-progress")
                    .wrap(middlewares::RequireJWT)
                    .route(web::put().to(update_progress)),
            )
            .service(
                web::resource("/course/enrollment")
                    .wrap(middlewares::RequireJWT)
                    .route(web::get().to(get_enrollment)),
            )
            .service(
                web::resource("/saveQuizResult")
                    .wrap(middlewares::RequireJWT)
                    .route(web::post().to(save_quiz_result)),
            )
            .service(
                web::resource("/submitFeedback")
                    .wrap(middlewares::RequireJWT)
                    .route(web::post().to(submit_feedback)),
            )
            // 管理员端点（RequireJWT 在外层先执行）
            .service(
                web::resource("/create")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route(web::post().to(create_course)),
            )
            .service(
                web::resource("/insert-dummy")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route(web::get().to(insert_dummy_courses)),
            ),
    );
}
