//! API Response types
//!
//! Every order-service endpoint wraps its payload in the same envelope:
//!
//! ```json
//! {
//!     "success": true,
//!     "data": { ... }
//! }
//! ```
//!
//! or, on failure:
//!
//! ```json
//! {
//!     "success": false,
//!     "error": { "message": "Order not found", "code": "NOT_FOUND" }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Error body carried by a failed response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    /// Human-readable message
    pub message: String,
    /// Machine-readable code (e.g. "NOT_FOUND", "UNAUTHORIZED")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: Some(code.into()),
        }
    }
}

/// Unified API response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorBody::new(message)),
        }
    }

    /// Create an error response with a machine-readable code
    pub fn error_with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorBody::with_code(message, code)),
        }
    }

    /// Error message, if any
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_serializes_without_error_field() {
        let resp = ApiResponse::ok(42u32);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 42);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn error_envelope_roundtrips() {
        let json = r#"{"success":false,"error":{"message":"Order not found","code":"NOT_FOUND"}}"#;
        let resp: ApiResponse<()> = serde_json::from_str(json).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.error_message(), Some("Order not found"));
        assert_eq!(resp.error.unwrap().code.as_deref(), Some("NOT_FOUND"));
    }
}
