use serde::{Deserialize, Serialize};

use crate::models::courses::entities::Course;

// 选课状态
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum EnrollmentStatus {
    OnGoing,   // 进行中
    Completed, // 已完成
}

impl EnrollmentStatus {
    pub const ON_GOING: &'static str = "on-going";
    pub const COMPLETED: &'static str = "completed";
}

impl<'de> Deserialize<'de> for EnrollmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            EnrollmentStatus::ON_GOING => Ok(EnrollmentStatus::OnGoing),
            EnrollmentStatus::COMPLETED => Ok(EnrollmentStatus::Completed),
            _ => Err(serde::de::Error::custom(format!(
                "无效的选课状态: '{s}'. 支持的状态: on-going, completed"
            ))),
        }
    }
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrollmentStatus::OnGoing => write!(f, "{}", EnrollmentStatus::ON_GOING),
            EnrollmentStatus::Completed => write!(f, "{}", EnrollmentStatus::COMPLETED),
        }
    }
}

impl std::str::FromStr for EnrollmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on-going" => Ok(EnrollmentStatus::OnGoing),
            "completed" => Ok(EnrollmentStatus::Completed),
            _ => Err(format!("Invalid enrollment status: {s}")),
        }
    }
}

// 选课实体
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub enrollment_date: chrono::DateTime<chrono::Utc>,
    pub status: EnrollmentStatus,
    pub progress_percentage: i32,
    pub deadline_date: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 选课记录连同完整课程数据
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentWithCourse {
    #[serde(flatten)]
    pub enrollment: Enrollment,
    pub course: Course,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(EnrollmentStatus::OnGoing.to_string(), "on-going");
        assert_eq!(EnrollmentStatus::Completed.to_string(), "completed");
        assert_eq!(
            EnrollmentStatus::from_str("on-going").unwrap(),
            EnrollmentStatus::OnGoing
        );
        assert!(EnrollmentStatus::from_str("paused").is_err());
    }
}
