use serde::Serialize;

use super::entities::{Enrollment, EnrollmentWithCourse};

// {success, enrollment} 载荷
#[derive(Debug, Serialize)]
pub struct EnrollmentResponse {
    pub enrollment: Enrollment,
}

// {success, enrollment} 载荷，课程数据已联结
#[derive(Debug, Serialize)]
pub struct EnrollmentDetailResponse {
    pub enrollment: EnrollmentWithCourse,
}
