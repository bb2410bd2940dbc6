//! # Chaincode Shim - Transaction-Scoped Ledger Access
//!
//! ## Purpose
//!
//! Gives chaincode business logic a per-transaction `ChaincodeStub` for
//! reading, writing and deleting ledger state, calling other chaincodes,
//! reading invocation arguments and deriving composite keys. The network
//! exchange with the peer is delegated to a `Handler`.
//!
//! ## Stub Contract
//!
//! | Property | Enforcement Location |
//! |----------|---------------------|
//! | Transaction id forwarded unchanged on every call | `stub.rs` - every handler call passes `self.transaction_id` |
//! | Argument snapshot never mutated | `domain/value_objects.rs` - `ArgumentSnapshot` has no mutators |
//! | Byte-exact form for every operation | `stub.rs` - `*_raw_*` methods; string forms wrap them |
//! | Handler errors surfaced unchanged | `errors.rs` - `StubError::Handler` is transparent |
//! | Composite keys length-prefixed | `domain/services.rs` - `create_composite_key()` |
//!
//! ## Outbound Dependencies
//!
//! | Collaborator | Trait | Purpose |
//! |--------------|-------|---------|
//! | Peer connection | `Handler` | get/put/delete state, invoke chaincode |
//!
//! ## Usage Example
//!
//! ```ignore
//! use chaincode_shim::prelude::*;
//!
//! let stub = ChaincodeStub::new(tx_id, &handler, args);
//! let key = stub.create_composite_key("asset", &["owner", "alice"]);
//! stub.put_state(&key, "100").await?;
//! assert_eq!(stub.get_state(&key).await?, "100");
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod ports;
pub mod stub;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::domain::entities::Response;
    pub use crate::domain::services::create_composite_key;
    pub use crate::domain::value_objects::{ArgumentSnapshot, TransactionId};

    pub use crate::ports::inbound::Chaincode;
    pub use crate::ports::outbound::Handler;

    pub use crate::errors::{ConfigError, HandlerError, StubError};

    pub use crate::adapters::{HandlerCall, HandlerOperation, InMemoryHandler};

    pub use crate::config::ShimConfig;
    pub use crate::logging::init_logging;

    pub use crate::stub::ChaincodeStub;
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_exports() {
        use prelude::*;
        let _ = ShimConfig::default();
        let _ = Response::default();
        assert_eq!(create_composite_key("a", &["b"]), "a1b");
    }

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
