//! Error response DTOs.

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response format.
///
/// `success` is always false; the frontend branches on it before looking at
/// the message. Correlation with a specific request goes through the
/// `x-request-id` response header rather than the body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Creates a new error response with code and message.
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            success: false,
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    /// Adds structured details to the error response.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_flag_is_always_false() {
        let response = ErrorResponse::new("NOT_FOUND", "missing");
        assert!(!response.success);
    }

    #[test]
    fn details_are_omitted_when_absent() {
        let json = serde_json::to_string(&ErrorResponse::new("X", "y")).unwrap();
        assert!(!json.contains("details"));
    }
}
