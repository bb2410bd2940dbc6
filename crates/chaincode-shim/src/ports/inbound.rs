//! # Driving Ports (API - Inbound)
//!
//! The interface business logic implements. The execution environment builds
//! a `ChaincodeStub` for each transaction and hands it to one of these entry
//! points.

use crate::domain::entities::Response;
use crate::stub::ChaincodeStub;
use async_trait::async_trait;

// =============================================================================
// CHAINCODE (Primary Driving Port)
// =============================================================================

/// User business logic.
///
/// Both entry points receive a stub bound to the current transaction and
/// report their outcome as a [`Response`]. Stub errors are expected to be
/// turned into an error response, not panics.
///
/// ## Usage
///
/// ```ignore
/// struct Counter;
///
/// #[async_trait]
/// impl Chaincode for Counter {
///     async fn init(&self, stub: &ChaincodeStub<'_>) -> Response {
///         match stub.put_state("count", "0").await {
///             Ok(()) => Response::success(Vec::new()),
///             Err(e) => Response::error(e.to_string()),
///         }
///     }
///
///     async fn invoke(&self, stub: &ChaincodeStub<'_>) -> Response { /* ... */ }
/// }
/// ```
#[async_trait]
pub trait Chaincode: Send + Sync {
    /// Called once when the chaincode is instantiated.
    async fn init(&self, stub: &ChaincodeStub<'_>) -> Response;

    /// Called for every transaction addressed to the chaincode.
    async fn invoke(&self, stub: &ChaincodeStub<'_>) -> Response;
}
