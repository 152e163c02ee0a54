//! 业务逻辑层
//!
//! 每个领域一个目录，目录内每个操作一个文件；mod.rs 持有服务结构体，
//! 通过请求的 app_data 取得存储层句柄。

pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod departments;
pub mod discussions;
pub mod enrollments;
pub mod feedbacks;
pub mod quizzes;
pub mod reports;
pub mod seed;
pub mod system;

pub use auth::AuthService;
pub use courses::CourseService;
pub use dashboard::DashboardService;
pub use departments::DepartmentService;
pub use discussions::DiscussionService;
pub use enrollments::EnrollmentService;
pub use feedbacks::FeedbackService;
pub use quizzes::QuizService;
pub use reports::ReportService;
pub use seed::SeedService;
pub use system::SystemService;
