use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段此时已是哈希值）
    async fn create_user(&self, user: CreateUserRequest, role: UserRole) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 列出全部用户
    async fn list_users(&self) -> Result<Vec<User>>;
    // 统计用户总数
    async fn count_users(&self) -> Result<u64>;
    // 按角色统计用户数量
    async fn count_users_by_role(&self, role: UserRole) -> Result<u64>;

    /// 部门/团队管理方法
    // 创建部门
    async fn create_department(&self, name: &str) -> Result<Department>;
    // 通过ID获取部门
    async fn get_department_by_id(&self, id: i64) -> Result<Option<Department>>;
    // 通过名称获取部门（名称唯一）
    async fn get_department_by_name(&self, name: &str) -> Result<Option<Department>>;
    // 列出全部部门
    async fn list_departments(&self) -> Result<Vec<Department>>;
    // 在部门下创建团队
    async fn create_team(&self, department_id: i64, name: &str) -> Result<Team>;
    // 通过ID获取团队
    async fn get_team_by_id(&self, id: i64) -> Result<Option<Team>>;
    // 列出部门下的团队
    async fn list_teams_by_department(&self, department_id: i64) -> Result<Vec<Team>>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 列出全部课程
    async fn list_courses(&self) -> Result<Vec<Course>>;
    // 统计课程数量
    async fn count_courses(&self) -> Result<u64>;

    /// 选课管理方法
    // 创建选课记录（status=on-going，progress=0，enrollmentDate=now）
    async fn create_enrollment(
        &self,
        user_id: i64,
        course_id: i64,
        deadline_date: chrono::DateTime<chrono::Utc>,
    ) -> Result<Enrollment>;
    // 通过ID获取选课记录
    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>>;
    // 获取用户在某课程上的第一条选课记录
    async fn find_enrollment(&self, user_id: i64, course_id: i64) -> Result<Option<Enrollment>>;
    // 列出用户全部选课记录，按选课时间倒序
    async fn list_enrollments_for_user(&self, user_id: i64) -> Result<Vec<Enrollment>>;
    // 覆写进度与状态
    async fn update_enrollment_progress(
        &self,
        id: i64,
        progress_percentage: i32,
        status: EnrollmentStatus,
    ) -> Result<Option<Enrollment>>;
    // 统计用户已完成的选课数量
    async fn count_completed_enrollments(&self, user_id: i64) -> Result<u64>;

    /// 测验成绩方法
    // 追加一条测验成绩
    async fn create_quiz_result(&self, user_id: i64, course_id: i64, score: i32)
    -> Result<QuizResult>;
    // 列出全部测验成绩
    async fn list_quiz_results(&self) -> Result<Vec<QuizResult>>;
    // 列出用户全部测验成绩
    async fn list_quiz_results_for_user(&self, user_id: i64) -> Result<Vec<QuizResult>>;
    // 列出用户最近 limit 条测验成绩，按时间倒序
    async fn list_recent_quiz_results(&self, user_id: i64, limit: u64) -> Result<Vec<QuizResult>>;

    /// 讨论区方法
    // 新增全局留言
    async fn create_discussion(&self, user_id: i64, message: &str) -> Result<Discussion>;
    // 列出全部全局留言，按时间倒序
    async fn list_discussions(&self) -> Result<Vec<Discussion>>;
    // 删除全局留言，返回被删除的记录
    async fn delete_discussion(&self, id: i64) -> Result<Option<Discussion>>;
    // 新增课程留言
    async fn create_course_discussion(
        &self,
        user_id: i64,
        course_id: i64,
        message: &str,
    ) -> Result<CourseDiscussion>;
    // 列出课程留言，按时间倒序
    async fn list_course_discussions(&self, course_id: i64) -> Result<Vec<CourseDiscussion>>;
    // 删除课程留言
    async fn delete_course_discussion(&self, id: i64) -> Result<bool>;

    /// 课程反馈方法（只写）
    async fn create_feedback(&self, feedback: SubmitFeedbackRequest) -> Result<Feedback>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
