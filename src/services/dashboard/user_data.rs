use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::{HashMap, HashSet};

use super::DashboardService;
use super::partition::{available_courses, partition_enrollments};
use crate::models::dashboard::responses::UserDataResponse;
use crate::models::discussions::entities::DiscussionWithAuthor;
use crate::models::enrollments::entities::{Enrollment, EnrollmentWithCourse};
use crate::models::quizzes::entities::RecentQuiz;
use crate::models::{ApiResponse, courses::entities::Course};
use crate::services::reports::aggregate::top_scores_by_user;
use crate::storage::Storage;

const TOP_SCORER_LIMIT: usize = 5;
const RECENT_QUIZ_LIMIT: u64 = 5;

// 把选课记录与课程目录联结；课程已被删除的记录跳过
fn join_with_courses(
    enrollments: Vec<Enrollment>,
    course_map: &HashMap<i64, Course>,
) -> Vec<EnrollmentWithCourse> {
    enrollments
        .into_iter()
        .filter_map(|enrollment| {
            course_map
                .get(&enrollment.course_id)
                .map(|course| EnrollmentWithCourse {
                    enrollment,
                    course: course.clone(),
                })
        })
        .collect()
}

pub async fn get_user_data(
    service: &DashboardService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match build_user_data(&storage, user_id).await {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data))),
        Err(e) => Ok(HttpResponse::InternalServerError()
            .json(ApiResponse::error_empty(format!("Failed to fetch user data: {e}")))),
    }
}

async fn build_user_data(
    storage: &std::sync::Arc<dyn Storage>,
    user_id: i64,
) -> crate::errors::Result<UserDataResponse> {
    // 全部数据每次请求重新查询，没有任何缓存层
    let courses = storage.list_courses().await?;
    let enrollments = storage.list_enrollments_for_user(user_id).await?;

    let course_map: HashMap<i64, Course> =
        courses.iter().map(|c| (c.id, c.clone())).collect();
    let enrolled_ids: HashSet<i64> = enrollments.iter().map(|e| e.course_id).collect();

    // 课程三分区
    let available = available_courses(courses, &enrolled_ids);
    let (ongoing, completed) = partition_enrollments(enrollments);
    let ongoing_courses = join_with_courses(ongoing, &course_map);
    let completed_courses = join_with_courses(completed, &course_map);

    // 最高分榜：按用户取单次最高分，降序前 5
    let all_quizzes = storage.list_quiz_results().await?;
    let mut username_cache: HashMap<i64, Option<String>> = HashMap::new();
    let mut top_scorers = Vec::new();
    for (scorer_id, total_score) in top_scores_by_user(&all_quizzes, TOP_SCORER_LIMIT) {
        let name = match username_cache.get(&scorer_id) {
            Some(cached) => cached.clone(),
            None => {
                let fetched = storage
                    .get_user_by_id(scorer_id)
                    .await?
                    .map(|u| u.username);
                username_cache.insert(scorer_id, fetched.clone());
                fetched
            }
        };
        // 用户已不存在的成绩跳过，与联结语义一致
        if let Some(name) = name {
            top_scorers.push(crate::models::reports::responses::TopScorer {
                name,
                total_score,
            });
        }
    }

    // 最近测验，附课程标题
    let recent_quizzes = storage
        .list_recent_quiz_results(user_id, RECENT_QUIZ_LIMIT)
        .await?
        .into_iter()
        .map(|quiz| {
            let course_title = course_map
                .get(&quiz.course_id)
                .map(|c| c.title.clone())
                .unwrap_or_default();
            RecentQuiz { quiz, course_title }
        })
        .collect();

    // 全局讨论，附作者用户名
    let mut discussions = Vec::new();
    for discussion in storage.list_discussions().await? {
        let name = match username_cache.get(&discussion.user_id) {
            Some(cached) => cached.clone(),
            None => {
                let fetched = storage
                    .get_user_by_id(discussion.user_id)
                    .await?
                    .map(|u| u.username);
                username_cache.insert(discussion.user_id, fetched.clone());
                fetched
            }
        };
        if let Some(username) = name {
            discussions.push(DiscussionWithAuthor {
                discussion,
                username,
            });
        }
    }

    Ok(UserDataResponse {
        available_courses: available,
        ongoing_courses,
        completed_courses,
        top_scorers,
        recent_quizzes,
        discussions,
    })
}
