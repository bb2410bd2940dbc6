//! # Domain Entities
//!
//! The outcome a chaincode reports back to the peer.

use serde::{Deserialize, Serialize};

// =============================================================================
// RESPONSE
// =============================================================================

/// Result of a chaincode `init` or `invoke`.
///
/// Status codes follow HTTP conventions: `200` is success, anything at or
/// above [`Response::ERROR_THRESHOLD`] is an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Status code.
    pub status: i32,
    /// Human readable message, usually set on errors.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Payload returned to the caller.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payload: Vec<u8>,
}

impl Response {
    /// Success.
    pub const OK: i32 = 200;
    /// Lowest status treated as an error.
    pub const ERROR_THRESHOLD: i32 = 400;
    /// Generic failure.
    pub const ERROR: i32 = 500;

    /// Successful response carrying `payload`.
    #[must_use]
    pub fn success(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            status: Self::OK,
            message: String::new(),
            payload: payload.into(),
        }
    }

    /// Error response with `message` and no payload.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Self::ERROR,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    /// Returns true if the status is below the error threshold.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status < Self::ERROR_THRESHOLD
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::success(Vec::new())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_and_error() {
        let ok = Response::success(b"done".to_vec());
        assert!(ok.is_ok());
        assert_eq!(ok.status, 200);
        assert_eq!(ok.payload, b"done");

        let err = Response::error("no such asset");
        assert!(!err.is_ok());
        assert_eq!(err.status, 500);
        assert!(err.payload.is_empty());
    }

    #[test]
    fn test_threshold_boundary() {
        let mut r = Response::default();
        r.status = 399;
        assert!(r.is_ok());
        r.status = 400;
        assert!(!r.is_ok());
    }

    #[test]
    fn test_serde_skips_empty_fields() {
        let json = serde_json::to_string(&Response::success(Vec::new())).unwrap();
        assert_eq!(json, r#"{"status":200}"#);

        let parsed: Response = serde_json::from_str(r#"{"status":500,"message":"x"}"#).unwrap();
        assert_eq!(parsed, Response::error("x"));
    }
}
