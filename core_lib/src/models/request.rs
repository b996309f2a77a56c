//! Response envelope shared by the JSON endpoints

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_is_omitted_when_absent() {
        let json = serde_json::to_value(ApiResponse::<()>::success("ok")).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "message": "ok" }));
    }

    #[test]
    fn test_error_shape() {
        let response = ApiResponse::<()>::error("nope");
        assert!(!response.success);
        assert_eq!(response.message, "nope");
        assert!(response.data.is_none());
    }

    #[test]
    fn test_response_without_message_field_is_rejected() {
        let parsed = serde_json::from_str::<ApiResponse<()>>(r#"{"success": true}"#);
        assert!(parsed.is_err());
    }
}
