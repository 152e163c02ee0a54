use serde::Serialize;

// 统一的API响应结构：{success, message?, ...payload}
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    // 载荷非空但 success=false 的场景（如课程讨论为空时返回空列表）
    pub fn failure_with_data(data: T, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn error_empty(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Payload {
        answer: i32,
    }

    #[test]
    fn test_payload_is_flattened() {
        let json =
            serde_json::to_value(ApiResponse::success(Payload { answer: 42 })).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["answer"], 42);
        assert!(json.get("message").is_none());
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_error_envelope() {
        let json = serde_json::to_value(ApiResponse::error_empty("Enrollment not found")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Enrollment not found");
    }
}
