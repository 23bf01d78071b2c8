//! API response envelope

use serde::{Deserialize, Serialize};

/// Standard API response wrapper
///
/// Every endpoint answers with `{"success": bool, "message": string}` plus
/// an optional payload flattened into the body. The HTTP status code carries
/// the error kind; the body stays uniform for clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,

    /// Human-readable outcome message
    pub message: String,

    /// Response payload (present on success, flattened into the body)
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response with a payload
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Extract the payload, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl ApiResponse<()> {
    /// Create a successful response with no payload
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    /// Create an error response
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
    use serde_json::json;

    #[derive(Serialize, Deserialize, Debug, Clone)]
    struct TokenPayload {
        token: String,
    }

    #[test]
    fn test_success_payload_is_flattened() {
        let response = ApiResponse::success(
            "User logged in successfully",
            TokenPayload {
                token: "abc".to_string(),
            },
        );
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "message": "User logged in successfully",
                "token": "abc",
            })
        );
    }

    #[test]
    fn test_error_has_no_payload_keys() {
        let response = ApiResponse::error("Invalid credentials");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "success": false,
                "message": "Invalid credentials",
            })
        );
    }
}
