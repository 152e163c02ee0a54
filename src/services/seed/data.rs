use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::error;

use super::SeedService;
use crate::models::ApiResponse;
use crate::models::users::{entities::UserRole, requests::CreateUserRequest};
use crate::services::enrollments::enroll::deadline_from_days;
use crate::storage::Storage;
use crate::utils::password::hash_password;

const DEMO_USER_COUNT: usize = 5;
const ENROLLMENTS_PER_USER: usize = 2;
const MESSAGES_PER_USER: usize = 2;
const QUIZZES_PER_ENROLLMENT: usize = 2;
const DEMO_PASSWORD: &str = "ChangeMe123";

const DEMO_MESSAGES: [&str; 5] = [
    "This is my first message.",
    "I really enjoyed this course!",
    "Can anyone help me with this topic?",
    "Looking forward to the next lesson.",
    "I have a question about the quiz.",
];

pub async fn seed_data(service: &SeedService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match run_seed(&storage).await {
        Ok(()) => Ok(HttpResponse::Created()
            .json(ApiResponse::success_empty("Dummy data inserted successfully!"))),
        Err(e) => {
            error!("Failed to seed demo data: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(format!("Failed to insert dummy data: {e}"))))
        }
    }
}

async fn run_seed(storage: &Arc<dyn Storage>) -> crate::errors::Result<()> {
    // 示例账号需要挂在真实的部门/团队下
    let department = storage
        .list_departments()
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| {
            crate::errors::LMSystemError::validation("Create a department before seeding users")
        })?;
    let team = storage
        .list_teams_by_department(department.id)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| {
            crate::errors::LMSystemError::validation("Create a team before seeding users")
        })?;

    let courses = storage.list_courses().await?;
    if courses.is_empty() {
        return Err(crate::errors::LMSystemError::validation(
            "Create courses before seeding users",
        ));
    }

    let password_hash = hash_password(DEMO_PASSWORD)?;

    let mut rng = rand::rng();
    for index in 1..=DEMO_USER_COUNT {
        let user = storage
            .create_user(
                CreateUserRequest {
                    username: format!("User {index}"),
                    email: format!("user{index}@jmangroup.com"),
                    password: password_hash.clone(),
                    department: department.id,
                    team: team.id,
                },
                UserRole::Employee,
            )
            .await?;

        // 每人随机选两门不同的课程，截止时间按课程窗口换算
        let mut enrolled_course_ids: HashSet<i64> = HashSet::new();
        while enrolled_course_ids.len() < ENROLLMENTS_PER_USER.min(courses.len()) {
            let course = courses
                .choose(&mut rng)
                .expect("course list checked non-empty");
            if !enrolled_course_ids.insert(course.id) {
                continue;
            }
            let deadline = deadline_from_days(chrono::Utc::now(), course.deadline_days);
            storage
                .create_enrollment(user.id, course.id, deadline)
                .await?;
        }

        // 每人两条随机留言
        for _ in 0..MESSAGES_PER_USER {
            let message = DEMO_MESSAGES
                .choose(&mut rng)
                .expect("message list is non-empty");
            storage.create_discussion(user.id, message).await?;
        }

        // 每门已选课程两次随机成绩
        for course_id in &enrolled_course_ids {
            for _ in 0..QUIZZES_PER_ENROLLMENT {
                let score = rng.random_range(0..=100);
                storage.create_quiz_result(user.id, *course_id, score).await?;
            }
        }
    }

    Ok(())
}
