use serde::Serialize;

use crate::models::courses::entities::Course;
use crate::models::discussions::entities::DiscussionWithAuthor;
use crate::models::enrollments::entities::EnrollmentWithCourse;
use crate::models::quizzes::entities::RecentQuiz;
use crate::models::reports::responses::TopScorer;

// 员工仪表盘载荷：课程三分区 + 榜单 + 最近测验 + 全局讨论。
// 进行中的分区沿用原接口的字段名 enrolledCourses。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDataResponse {
    pub available_courses: Vec<Course>,
    #[serde(rename = "enrolledCourses")]
    pub ongoing_courses: Vec<EnrollmentWithCourse>,
    pub completed_courses: Vec<EnrollmentWithCourse>,
    pub top_scorers: Vec<TopScorer>,
    pub recent_quizzes: Vec<RecentQuiz>,
    pub discussions: Vec<DiscussionWithAuthor>,
}
