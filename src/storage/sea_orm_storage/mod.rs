//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod courses;
mod departments;
mod discussions;
mod enrollments;
mod feedbacks;
mod quiz_results;
mod users;

use crate::config::AppConfig;
use crate::errors::{LMSystemError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| LMSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| LMSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| LMSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(LMSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    courses::{entities::Course, requests::CreateCourseRequest},
    departments::entities::{Department, Team},
    discussions::entities::{CourseDiscussion, Discussion},
    enrollments::entities::{Enrollment, EnrollmentStatus},
    feedbacks::{entities::Feedback, requests::SubmitFeedbackRequest},
    quizzes::entities::QuizResult,
    users::{
        entities::{User, UserRole},
        requests::CreateUserRequest,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest, role: UserRole) -> Result<User> {
        self.create_user_impl(user, role).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.list_users_impl().await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn count_users_by_role(&self, role: UserRole) -> Result<u64> {
        self.count_users_by_role_impl(role).await
    }

    // 部门/团队模块
    async fn create_department(&self, name: &str) -> Result<Department> {
        self.create_department_impl(name).await
    }

    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>> {
        self.get_department_by_id_impl(id).await
    }

    async fn get_department_by_name(&self, name: &str) -> Result<Option<Department>> {
        self.get_department_by_name_impl(name).await
    }

    async fn list_departments(&self) -> Result<Vec<Department>> {
        self.list_departments_impl().await
    }

    async fn create_team(&self, department_id: i64, name: &str) -> Result<Team> {
        self.create_team_impl(department_id, name).await
    }

    async fn get_team_by_id(&self, id: i64) -> Result<Option<Team>> {
        self.get_team_by_id_impl(id).await
    }

    async fn list_teams_by_department(&self, department_id: i64) -> Result<Vec<Team>> {
        self.list_teams_by_department_impl(department_id).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.list_courses_impl().await
    }

    async fn count_courses(&self) -> Result<u64> {
        self.count_courses_impl().await
    }

    // 选课模块
    async fn create_enrollment(
        &self,
        user_id: i64,
        course_id: i64,
        deadline_date: chrono::DateTime<chrono::Utc>,
    ) -> Result<Enrollment> {
        self.create_enrollment_impl(user_id, course_id, deadline_date)
            .await
    }

    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_id_impl(id).await
    }

    async fn find_enrollment(&self, user_id: i64, course_id: i64) -> Result<Option<Enrollment>> {
        self.find_enrollment_impl(user_id, course_id).await
    }

    async fn list_enrollments_for_user(&self, user_id: i64) -> Result<Vec<Enrollment>> {
        self.list_enrollments_for_user_impl(user_id).await
    }

    async fn update_enrollment_progress(
        &self,
        id: i64,
        progress_percentage: i32,
        status: EnrollmentStatus,
    ) -> Result<Option<Enrollment>> {
        self.update_enrollment_progress_impl(id, progress_percentage, status)
            .await
    }

    async fn count_completed_enrollments(&self, user_id: i64) -> Result<u64> {
        self.count_completed_enrollments_impl(user_id).await
    }

    // 测验成绩模块
    async fn create_quiz_result(
        &self,
        user_id: i64,
        course_id: i64,
        score: i32,
    ) -> Result<QuizResult> {
        self.create_quiz_result_impl(user_id, course_id, score).await
    }

    async fn list_quiz_results(&self) -> Result<Vec<QuizResult>> {
        self.list_quiz_results_impl().await
    }

    async fn list_quiz_results_for_user(&self, user_id: i64) -> Result<Vec<QuizResult>> {
        self.list_quiz_results_for_user_impl(user_id).await
    }

    async fn list_recent_quiz_results(&self, user_id: i64, limit: u64) -> Result<Vec<QuizResult>> {
        self.list_recent_quiz_results_impl(user_id, limit).await
    }

    // 讨论区模块
    async fn create_discussion(&self, user_id: i64, message: &str) -> Result<Discussion> {
        self.create_discussion_impl(user_id, message).await
    }

    async fn list_discussions(&self) -> Result<Vec<Discussion>> {
        self.list_discussions_impl().await
    }

    async fn delete_discussion(&self, id: i64) -> Result<Option<Discussion>> {
        self.delete_discussion_impl(id).await
    }

    async fn create_course_discussion(
        &self,
        user_id: i64,
        course_id: i64,
        message: &str,
    ) -> Result<CourseDiscussion> {
        self.create_course_discussion_impl(user_id, course_id, message)
            .await
    }

    async fn list_course_discussions(&self, course_id: i64) -> Result<Vec<CourseDiscussion>> {
        self.list_course_discussions_impl(course_id).await
    }

    async fn delete_course_discussion(&self, id: i64) -> Result<bool> {
        self.delete_course_discussion_impl(id).await
    }

    // 课程反馈模块
    async fn create_feedback(&self, feedback: SubmitFeedbackRequest) -> Result<Feedback> {
        self.create_feedback_impl(feedback).await
    }
}
