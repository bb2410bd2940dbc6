//! # Driven Ports (SPI - Outbound)
//!
//! The interface the stub depends on to reach the peer.
//!
//! The handler owns the protocol: request/response correlation, stream
//! management, timeouts and retries all live behind this trait. The stub only
//! forwards its bound transaction id with each call.

use crate::domain::value_objects::TransactionId;
use crate::errors::HandlerError;
use async_trait::async_trait;

// =============================================================================
// HANDLER (Peer Connection)
// =============================================================================

/// Transaction-scoped access to the peer.
///
/// One handler serves many stubs, concurrently and across transactions, so
/// implementations take `&self` and must be `Send + Sync`.
///
/// ## Implementation Notes
///
/// The adapter implementing this trait should:
/// 1. Tag each outgoing request with `transaction_id`
/// 2. Match the peer's response to the request by that id
/// 3. Report failures as `HandlerError` without partial results
#[async_trait]
pub trait Handler: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// An absent key is reported however the peer reports it (typically an
    /// empty payload).
    async fn handle_get_state(
        &self,
        key: &str,
        transaction_id: &TransactionId,
    ) -> Result<Vec<u8>, HandlerError>;

    /// Write `value` under `key`.
    async fn handle_put_state(
        &self,
        key: &str,
        value: Vec<u8>,
        transaction_id: &TransactionId,
    ) -> Result<(), HandlerError>;

    /// Delete `key`.
    async fn handle_delete_state(
        &self,
        key: &str,
        transaction_id: &TransactionId,
    ) -> Result<(), HandlerError>;

    /// Invoke `function` on another chaincode and return its payload.
    async fn handle_invoke_chaincode(
        &self,
        chaincode_name: &str,
        function: &str,
        args: &[Vec<u8>],
        transaction_id: &TransactionId,
    ) -> Result<Vec<u8>, HandlerError>;
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Mock implementation for testing
    struct EchoHandler;

    #[async_trait]
    impl Handler for EchoHandler {
        async fn handle_get_state(
            &self,
            key: &str,
            transaction_id: &TransactionId,
        ) -> Result<Vec<u8>, HandlerError> {
            Ok(format!("{transaction_id}:{key}").into_bytes())
        }

        async fn handle_put_state(
            &self,
            _key: &str,
            _value: Vec<u8>,
            _transaction_id: &TransactionId,
        ) -> Result<(), HandlerError> {
            Ok(())
        }

        async fn handle_delete_state(
            &self,
            _key: &str,
            _transaction_id: &TransactionId,
        ) -> Result<(), HandlerError> {
            Err(HandlerError::AccessDenied("read-only".to_string()))
        }

        async fn handle_invoke_chaincode(
            &self,
            chaincode_name: &str,
            function: &str,
            args: &[Vec<u8>],
            _transaction_id: &TransactionId,
        ) -> Result<Vec<u8>, HandlerError> {
            Ok(format!("{chaincode_name}.{function}/{}", args.len()).into_bytes())
        }
    }

    #[tokio::test]
    async fn test_handler_is_object_safe_and_shareable() {
        let handler: Arc<dyn Handler> = Arc::new(EchoHandler);
        let tx = TransactionId::new("tx1");

        let value = handler.handle_get_state("k", &tx).await.unwrap();
        assert_eq!(value, b"tx1:k");

        let out = handler
            .handle_invoke_chaincode("other", "ping", &[b"a".to_vec()], &tx)
            .await
            .unwrap();
        assert_eq!(out, b"other.ping/1");

        let err = handler.handle_delete_state("k", &tx).await.unwrap_err();
        assert!(err.is_remote_rejection());
    }
}
