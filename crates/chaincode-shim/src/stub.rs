//! # Chaincode Stub
//!
//! The per-transaction facade business logic uses to reach the ledger.
//!
//! A stub binds three things for the duration of one invocation:
//! - the transaction id, forwarded unchanged with every handler call
//! - a borrowed handler, shared with every other stub it serves
//! - an immutable snapshot of the invocation arguments
//!
//! Every operation has a byte-exact form. The string forms are thin UTF-8
//! wrappers over them and fail with [`StubError::InvalidUtf8`] rather than
//! silently replacing bytes. Handler errors are returned as-is: the stub does
//! not validate keys, retry, or buffer writes.

use crate::domain::services::create_composite_key;
use crate::domain::value_objects::{ArgumentSnapshot, TransactionId};
use crate::errors::{Result, StubError};
use crate::ports::outbound::Handler;

use std::fmt;
use tracing::{instrument, trace, warn};

/// Ledger access for a single transaction.
pub struct ChaincodeStub<'a> {
    transaction_id: TransactionId,
    handler: &'a dyn Handler,
    arguments: ArgumentSnapshot,
}

impl<'a> ChaincodeStub<'a> {
    /// Create a stub for one invocation.
    ///
    /// `args` is copied; later changes to the caller's list are not seen.
    pub fn new<I, A>(
        transaction_id: impl Into<TransactionId>,
        handler: &'a dyn Handler,
        args: I,
    ) -> Self
    where
        I: IntoIterator<Item = A>,
        A: AsRef<[u8]>,
    {
        Self {
            transaction_id: transaction_id.into(),
            handler,
            arguments: ArgumentSnapshot::new(args),
        }
    }

    // =========================================================================
    // ARGUMENTS
    // =========================================================================

    /// Fresh copy of the invocation arguments.
    #[must_use]
    pub fn get_arguments(&self) -> Vec<Vec<u8>> {
        self.arguments.to_vec()
    }

    /// The invocation arguments decoded as UTF-8.
    ///
    /// Invalid byte sequences are replaced with U+FFFD; use
    /// [`get_arguments`](Self::get_arguments) for binary arguments.
    #[must_use]
    pub fn get_arguments_as_strings(&self) -> Vec<String> {
        self.arguments.to_strings()
    }

    /// Borrowed view of the argument snapshot.
    #[must_use]
    pub fn arguments(&self) -> &ArgumentSnapshot {
        &self.arguments
    }

    /// Splits the arguments into a function name (the first argument) and
    /// its parameters. Both are empty when there are no arguments.
    #[must_use]
    pub fn function_and_parameters(&self) -> (String, Vec<String>) {
        let mut strings = self.arguments.to_strings().into_iter();
        let function = strings.next().unwrap_or_default();
        (function, strings.collect())
    }

    /// The transaction this stub is bound to.
    #[must_use]
    pub fn get_transaction_id(&self) -> &str {
        self.transaction_id.as_str()
    }

    // =========================================================================
    // STATE (UTF-8)
    // =========================================================================

    /// Read `key` and decode the value as UTF-8.
    pub async fn get_state(&self, key: &str) -> Result<String> {
        let raw = self.get_raw_state(key).await?;
        decode_utf8("get_state", key, raw)
    }

    /// Write `value` under `key` as UTF-8 bytes.
    pub async fn put_state(&self, key: &str, value: &str) -> Result<()> {
        self.put_raw_state(key, value.as_bytes().to_vec()).await
    }

    /// Delete `key`.
    #[instrument(level = "debug", skip(self), fields(transaction_id = %self.transaction_id))]
    pub async fn del_state(&self, key: &str) -> Result<()> {
        self.handler
            .handle_delete_state(key, &self.transaction_id)
            .await
            .inspect_err(|e| warn!(error = %e, "delete state failed"))?;
        Ok(())
    }

    // =========================================================================
    // STATE (RAW)
    // =========================================================================

    /// Read the exact bytes stored under `key`.
    #[instrument(level = "debug", skip(self), fields(transaction_id = %self.transaction_id))]
    pub async fn get_raw_state(&self, key: &str) -> Result<Vec<u8>> {
        let value = self
            .handler
            .handle_get_state(key, &self.transaction_id)
            .await
            .inspect_err(|e| warn!(error = %e, "get state failed"))?;
        trace!(len = value.len(), "state read");
        Ok(value)
    }

    /// Write `value` under `key` unchanged.
    #[instrument(
        level = "debug",
        skip(self, value),
        fields(transaction_id = %self.transaction_id, len = value.len())
    )]
    pub async fn put_raw_state(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.handler
            .handle_put_state(key, value, &self.transaction_id)
            .await
            .inspect_err(|e| warn!(error = %e, "put state failed"))?;
        Ok(())
    }

    // =========================================================================
    // CHAINCODE-TO-CHAINCODE
    // =========================================================================

    /// Invoke `function` on `chaincode_name` and decode the reply as UTF-8.
    pub async fn invoke_chaincode(
        &self,
        chaincode_name: &str,
        function: &str,
        args: &[Vec<u8>],
    ) -> Result<String> {
        let raw = self
            .invoke_raw_chaincode(chaincode_name, function, args)
            .await?;
        decode_utf8("invoke_chaincode", chaincode_name, raw)
    }

    /// Invoke `function` on `chaincode_name` and return the reply bytes.
    #[instrument(
        level = "debug",
        skip(self, args),
        fields(transaction_id = %self.transaction_id, args = args.len())
    )]
    pub async fn invoke_raw_chaincode(
        &self,
        chaincode_name: &str,
        function: &str,
        args: &[Vec<u8>],
    ) -> Result<Vec<u8>> {
        let reply = self
            .handler
            .handle_invoke_chaincode(chaincode_name, function, args, &self.transaction_id)
            .await
            .inspect_err(|e| warn!(error = %e, "invoke chaincode failed"))?;
        Ok(reply)
    }

    // =========================================================================
    // KEYS
    // =========================================================================

    /// Composite key for `object_type` and `attributes`.
    ///
    /// See [`create_composite_key`](crate::domain::create_composite_key).
    #[must_use]
    pub fn create_composite_key<S: AsRef<str>>(
        &self,
        object_type: &str,
        attributes: &[S],
    ) -> String {
        create_composite_key(object_type, attributes)
    }
}

impl fmt::Debug for ChaincodeStub<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChaincodeStub")
            .field("transaction_id", &self.transaction_id)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}

fn decode_utf8(operation: &'static str, target: &str, raw: Vec<u8>) -> Result<String> {
    String::from_utf8(raw).map_err(|_| {
        warn!(operation, target, "payload is not valid UTF-8");
        StubError::InvalidUtf8 {
            operation,
            target: target.to_string(),
        }
    })
}

// =============================================================================
// TESTS
// =============================================================================
