//! 路径参数安全提取器
//!
//! 解析失败时直接返回 400 统一错误信封，避免在每个处理函数里重复校验。

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::ApiResponse;

/// 生成按路径参数名提取 i64 的 extractor 类型
macro_rules! define_safe_i64_extractor {
    ($(
        $name:ident($param:literal)
    ),* $(,)?) => {
        $(
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                    let parsed = req
                        .match_info()
                        .get($param)
                        .and_then(|raw| raw.parse::<i64>().ok())
                        .filter(|id| *id > 0);

                    ready(match parsed {
                        Some(id) => Ok($name(id)),
                        None => {
                            let response = HttpResponse::BadRequest().json(
                                ApiResponse::error_empty(concat!(
                                    "Invalid ",
                                    $param,
                                    " path parameter"
                                )),
                            );
                            Err(InternalError::from_response(
                                concat!("invalid ", $param),
                                response,
                            )
                            .into())
                        }
                    })
                }
            }
        )*
    };
}

define_safe_i64_extractor! {
    SafeIDI64("id"),
    SafeUserIdI64("userId"),
    SafeCourseIdI64("courseId"),
    SafeDepartmentIdI64("departmentId"),
}
