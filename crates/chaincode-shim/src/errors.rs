//! # Error Types
//!
//! All error types surfaced by the chaincode stub.
//!
//! Handler failures are wrapped, never rewritten: the `HandlerError` a caller
//! receives from a stub method is the one the handler produced.

use thiserror::Error;

// =============================================================================
// HANDLER ERRORS
// =============================================================================

/// Errors reported by the peer handler.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// The exchange with the peer could not be completed (stream broken,
    /// peer unreachable).
    #[error("communication failure: {0}")]
    Communication(String),

    /// The peer did not answer in time.
    #[error("peer response timeout after {timeout_ms}ms")]
    Timeout {
        /// How long the stub waited.
        timeout_ms: u64,
    },

    /// The peer rejected the request.
    #[error("rejected by peer (status {status}): {message}")]
    Rejected {
        /// Status code of the peer's response.
        status: i32,
        /// Reason given by the peer.
        message: String,
    },

    /// The target chaincode of an invocation is not installed.
    #[error("chaincode not found: {0}")]
    ChaincodeNotFound(String),

    /// The peer denied access to the requested resource.
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// Other handler error.
    #[error("handler error: {0}")]
    Other(String),
}

impl HandlerError {
    /// Returns true if the exchange itself failed (as opposed to the peer
    /// answering with a rejection).
    #[must_use]
    pub fn is_communication_failure(&self) -> bool {
        matches!(self, Self::Communication(_) | Self::Timeout { .. })
    }

    /// Returns true if the peer answered and refused the operation.
    #[must_use]
    pub fn is_remote_rejection(&self) -> bool {
        matches!(
            self,
            Self::Rejected { .. } | Self::ChaincodeNotFound(_) | Self::AccessDenied(_)
        )
    }
}

// =============================================================================
// STUB ERRORS
// =============================================================================

/// Errors returned by `ChaincodeStub` operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StubError {
    /// Failure reported by the handler, unchanged.
    #[error(transparent)]
    Handler(#[from] HandlerError),

    /// A payload expected to be UTF-8 text was not.
    #[error("{operation} returned non-UTF-8 payload for {target:?}")]
    InvalidUtf8 {
        /// Stub method that decoded the payload.
        operation: &'static str,
        /// State key or chaincode name the payload came from.
        target: String,
    },
}

impl StubError {
    /// Returns the underlying handler error, if any.
    #[must_use]
    pub fn handler_error(&self) -> Option<&HandlerError> {
        match self {
            Self::Handler(err) => Some(err),
            Self::InvalidUtf8 { .. } => None,
        }
    }
}

/// Result alias for stub operations.
pub type Result<T> = std::result::Result<T, StubError>;

// =============================================================================
// CONFIG ERRORS
// =============================================================================

/// Errors from shim configuration and logging setup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A configuration value is missing or malformed.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// The log filter directive could not be parsed.
    #[error("invalid log filter {directive:?}: {reason}")]
    InvalidLogFilter {
        /// The directive as configured.
        directive: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("logging already initialized: {0}")]
    LoggingInit(String),
}

// =============================================================================
// TESTS
// =============================================================================
