use serde::Serialize;

use super::entities::{
    CourseDiscussion, CourseDiscussionWithAuthor, Discussion, DiscussionWithAuthor,
};

// {success, message, messages} 载荷（全局讨论列表）
#[derive(Debug, Serialize)]
pub struct DiscussionListResponse {
    pub messages: Vec<DiscussionWithAuthor>,
}

// {success, message, data} 载荷（新增/删除单条全局留言）
#[derive(Debug, Serialize)]
pub struct DiscussionResponse {
    pub data: Discussion,
}

// {success, discussions} 载荷（课程讨论列表）
#[derive(Debug, Serialize)]
pub struct CourseDiscussionListResponse {
    pub discussions: Vec<CourseDiscussionWithAuthor>,
}

// {success, message, discussion} 载荷（新增单条课程留言）
#[derive(Debug, Serialize)]
pub struct CourseDiscussionResponse {
    pub discussion: CourseDiscussion,
}
