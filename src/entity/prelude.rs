//! 实体 prelude，便于批量导入

pub use super::course_discussions::Entity as CourseDiscussions;
pub use super::courses::Entity as Courses;
pub use super::departments::Entity as Departments;
pub use super::discussions::Entity as Discussions;
pub use super::enrollments::Entity as Enrollments;
pub use super::feedbacks::Entity as Feedbacks;
pub use super::quiz_results::Entity as QuizResults;
pub use super::teams::Entity as Teams;
pub use super::users::Entity as Users;
