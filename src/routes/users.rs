use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::LoginRequest;
use crate::models::discussions::requests::{NewCourseDiscussionRequest, NewDiscussionRequest};
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::services::{
    AuthService, DashboardService, DiscussionService, ReportService, SeedService,
};
use crate::utils::{SafeCourseIdI64, SafeIDI64, SafeUserIdI64};

// 懒加载的全局服务实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);
static DASHBOARD_SERVICE: Lazy<DashboardService> = Lazy::new(DashboardService::new_lazy);
static DISCUSSION_SERVICE: Lazy<DiscussionService> = Lazy::new(DiscussionService::new_lazy);
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);
static SEED_SERVICE: Lazy<SeedService> = Lazy::new(SeedService::new_lazy);

// HTTP处理程序
pub async fn login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(login_data.into_inner(), &req).await
}

pub async fn logout(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout(&req).await
}

pub async fn refresh(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.refresh(&req).await
}

pub async fn profile(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.profile(&req).await
}

pub async fn create_user(
    req: HttpRequest,
    user_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.register(user_data.into_inner(), &req).await
}

pub async fn user_data(req: HttpRequest, user_id: SafeUserIdI64) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.user_data(user_id.0, &req).await
}

pub async fn add_discussion_message(
    req: HttpRequest,
    message_data: web::Json<NewDiscussionRequest>,
) -> ActixResult<HttpResponse> {
    DISCUSSION_SERVICE
        .add_message(message_data.into_inner(), &req)
        .await
}

pub async fn get_discussion_messages(req: HttpRequest) -> ActixResult<HttpResponse> {
    DISCUSSION_SERVICE.list_messages(&req).await
}

pub async fn delete_discussion_message(
    req: HttpRequest,
    message_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    DISCUSSION_SERVICE.delete_message(message_id.0, &req).await
}

pub async fn add_course_discussion(
    req: HttpRequest,
    message_data: web::Json<NewCourseDiscussionRequest>,
) -> ActixResult<HttpResponse> {
    DISCUSSION_SERVICE
        .add_course_message(message_data.into_inner(), &req)
        .await
}

pub async fn get_course_discussions(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    DISCUSSION_SERVICE
        .list_course_messages(course_id.0, &req)
        .await
}

pub async fn delete_course_discussion(
    req: HttpRequest,
    message_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    DISCUSSION_SERVICE
        .delete_course_message(message_id.0, &req)
        .await
}

pub async fn fetch_statistics(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.statistics(&req).await
}

pub async fn top_performers(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.top_performers(&req).await
}

pub async fn all_user_statistics(req: HttpRequest) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.user_statistics(&req).await
}

pub async fn insert_dummy_data(req: HttpRequest) -> ActixResult<HttpResponse> {
    SEED_SERVICE.seed_data(&req).await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            // 开放端点
            .route("/login", web::post().to(login))
            .route("/logout", web::post().to(logout))
            .route("/refresh", web::post().to(refresh))
            // 登录用户端点
            .service(
                web::resource("/profile")
                    .wrap(middlewares::RequireJWT)
                    .route(web::get().to(profile)),
            )
            .service(
                web::resource("/user-data/{userId}")
                    .wrap(middlewares::RequireJWT)
                    .route(web::get().to(user_data)),
            )
            .service(
                web::resource("/addNewDiscussionMessage")
                    .wrap(middlewares::RequireJWT)
                    .route(web::post().to(add_discussion_message)),
            )
            .service(
                web::resource("/getDiscussionMessages")
                    .wrap(middlewares::RequireJWT)
                    .route(web::get().to(get_discussion_messages)),
            )
            .service(
                web::resource("/deleteDiscussionMessage/{id}")
                    .wrap(middlewares::RequireJWT)
                    .route(web::delete().to(delete_discussion_message)),
            )
            .service(
                web::resource("/course/discussion")
                    .wrap(middlewares::RequireJWT)
                    .route(web::post().to(add_course_discussion)),
            )
            .service(
                web::resource("/course/{courseId}/discussions")
                    .wrap(middlewares::RequireJWT)
                    .route(web::get().to(get_course_discussions)),
            )
            .service(
                web::resource("/course/discussions/{id}")
                    .wrap(middlewares::RequireJWT)
                    .route(web::delete().to(delete_course_discussion)),
            )
            // 管理员端点（RequireJWT 在外层先执行）
            .service(
                web::resource("/create")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route(web::post().to(create_user)),
            )
            .service(
                web::resource("/fetchStatistics")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route(web::get().to(fetch_statistics)),
            )
            .service(
                web::resource("/topPerformers")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route(web::get().to(top_performers)),
            )
            .service(
                web::resource("/getAllUserStatistics")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route(web::get().to(all_user_statistics)),
            )
            .service(
                web::resource("/insert-dummy-data")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route(web::get().to(insert_dummy_data)),
            ),
    );
}
