//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

use actix_web::http::StatusCode;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_lmsystem_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum LMSystemError {
            $($variant(String),)*
        }

        impl LMSystemError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(LMSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(LMSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(LMSystemError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl LMSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        LMSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_lmsystem_errors! {
    Validation("E001", "Validation Error"),
    NotFound("E002", "Resource Not Found"),
    Conflict("E003", "Resource Conflict"),
    DatabaseConfig("E004", "Database Configuration Error"),
    DatabaseConnection("E005", "Database Connection Error"),
    DatabaseOperation("E006", "Database Operation Error"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
    Authentication("E009", "Authentication Error"),
    Authorization("E010", "Authorization Error"),
}

impl LMSystemError {
    /// 映射到 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            LMSystemError::Validation(_) => StatusCode::BAD_REQUEST,
            LMSystemError::NotFound(_) => StatusCode::NOT_FOUND,
            LMSystemError::Conflict(_) => StatusCode::CONFLICT,
            LMSystemError::Authentication(_) => StatusCode::UNAUTHORIZED,
            LMSystemError::Authorization(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LMSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LMSystemError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for LMSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        LMSystemError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LMSystemError {
    fn from(err: serde_json::Error) -> Self {
        LMSystemError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for LMSystemError {
    fn from(err: chrono::ParseError) -> Self {
        LMSystemError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LMSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(LMSystemError::validation("test").code(), "E001");
        assert_eq!(LMSystemError::not_found("test").code(), "E002");
        assert_eq!(LMSystemError::conflict("test").code(), "E003");
        assert_eq!(LMSystemError::database_operation("test").code(), "E006");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            LMSystemError::validation("test").error_type(),
            "Validation Error"
        );
        assert_eq!(
            LMSystemError::conflict("test").error_type(),
            "Resource Conflict"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            LMSystemError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            LMSystemError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            LMSystemError::conflict("x").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            LMSystemError::database_operation("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_message() {
        let err = LMSystemError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = LMSystemError::not_found("Enrollment not found");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Enrollment not found"));
    }
}
