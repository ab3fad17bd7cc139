//! Common DTOs shared across multiple resources

use serde::{Deserialize, Serialize};

/// Uniform response envelope
///
/// The only shape the gateway returns to its own clients, regardless of
/// which backend answered.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope carrying a payload
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Successful envelope with no payload (acknowledgement-only operations)
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    /// Failure envelope; the payload is always absent
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
    fn test_ok_envelope_serialization() {
        let resp = ApiResponse::ok("Tickets retrieved", vec![1, 2, 3]);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"message\":\"Tickets retrieved\""));
        assert!(json.contains("\"data\":[1,2,3]"));
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let resp = ApiResponse::<serde_json::Value>::error("price must be greater than zero");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(!json.contains("data"));
    }

    #[test]
    fn test_ok_empty_envelope() {
        let resp = ApiResponse::<serde_json::Value>::ok_empty("Session closed");
        assert!(resp.success);
        assert!(resp.data.is_none());
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("data"));
    }

    #[test]
    fn test_envelope_deserialization_without_data() {
        let resp: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"success":false,"message":"nope"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message, "nope");
        assert!(resp.data.is_none());
    }
}
