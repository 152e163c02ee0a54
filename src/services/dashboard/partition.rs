//! 课程三分区
//!
//! 每次请求从选课记录现算，不做任何缓存：
//! - available：该用户没有选过、且报名窗口仍然开放的课程
//! - ongoing：progressPercentage < 100 的选课记录
//! - completed：progressPercentage == 100 的选课记录
//!
//! 三者互斥；选过的课程绝不会出现在 available 中。

use std::collections::HashSet;

use crate::models::courses::entities::Course;
use crate::models::enrollments::entities::Enrollment;

/// 按进度把选课记录分成（进行中，已完成）两组，保持输入顺序
pub fn partition_enrollments(enrollments: Vec<Enrollment>) -> (Vec<Enrollment>, Vec<Enrollment>) {
    enrollments
        .into_iter()
        .partition(|e| e.progress_percentage < 100)
}

/// 过滤可报名课程：未选过且报名窗口为正数天。
/// 原实现把天数直接与当前时间戳比较，恒为假命题；这里按窗口
/// 天数大于零判断课程是否仍可报名。
pub fn available_courses(courses: Vec<Course>, enrolled_course_ids: &HashSet<i64>) -> Vec<Course> {
    courses
        .into_iter()
        .filter(|c| !enrolled_course_ids.contains(&c.id) && c.deadline_days > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enrollments::entities::EnrollmentStatus;

    fn enrollment(id: i64, course_id: i64, progress: i32) -> Enrollment {
        let now = chrono::Utc::now();
        Enrollment {
            id,
            user_id: 1,
            course_id,
            enrollment_date: now,
            status: EnrollmentStatus::OnGoing,
            progress_percentage: progress,
            deadline_date: now,
            created_at: now,
            updated_at: now,
        }
    }

    fn course(id: i64, deadline_days: i32) -> Course {
        let now = chrono::Utc::now();
        Course {
            id,
            title: format!("Course Title {id}"),
            description: format!("Short description for course {id}."),
            thumbnail: "https://example.com/thumb.jpg".to_string(),
            deadline_days,
            video_url: "https://example.com/video".to_string(),
            rating: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_partition_by_progress() {
        let (ongoing, completed) = partition_enrollments(vec![
            enrollment(1, 10, 0),
            enrollment(2, 11, 100),
            enrollment(3, 12, 99),
        ]);
        assert_eq!(ongoing.len(), 2);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].course_id, 11);
    }

    #[test]
    fn test_partition_is_disjoint_and_exhaustive() {
        let input = vec![
            enrollment(1, 10, 0),
            enrollment(2, 11, 50),
            enrollment(3, 12, 100),
        ];
        let total = input.len();
        let (ongoing, completed) = partition_enrollments(input);
        assert_eq!(ongoing.len() + completed.len(), total);
        for e in &ongoing {
            assert!(completed.iter().all(|c| c.id != e.id));
        }
    }

    #[test]
    fn test_enrolled_courses_never_available() {
        let enrolled: HashSet<i64> = [10, 12].into_iter().collect();
        let available = available_courses(
            vec![course(10, 5), course(11, 5), course(12, 5)],
            &enrolled,
        );
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, 11);
    }

    #[test]
    fn test_closed_enrollment_window_not_available() {
        // 窗口天数需为正；0 天或负数视为已关闭
        let available = available_courses(
            vec![course(1, 0), course(2, -1), course(3, 7)],
            &HashSet::new(),
        );
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, 3);
    }
}
