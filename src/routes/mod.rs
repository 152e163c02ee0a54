pub mod courses;

pub mod departments;

pub mod system;

pub mod users;

pub use courses::configure_course_routes;
pub use departments::configure_department_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;
