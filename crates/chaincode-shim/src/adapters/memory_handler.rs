//! # In-Memory Handler
//!
//! A `Handler` that keeps the ledger in a map and dispatches chaincode
//! invocations to chaincodes registered in-process.
//!
//! Used for unit tests and for running chaincode locally without a peer.
//! Every call is journaled with the transaction id it carried, and any
//! operation can be made to fail with a chosen `HandlerError`.

use crate::domain::entities::Response;
use crate::domain::value_objects::TransactionId;
use crate::errors::HandlerError;
use crate::ports::inbound::Chaincode;
use crate::ports::outbound::Handler;
use crate::stub::ChaincodeStub;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Operations a handler serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandlerOperation {
    /// `handle_get_state`
    GetState,
    /// `handle_put_state`
    PutState,
    /// `handle_delete_state`
    DeleteState,
    /// `handle_invoke_chaincode`
    InvokeChaincode,
}

/// One journaled handler call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandlerCall {
    /// Which operation was called.
    pub operation: HandlerOperation,
    /// State key, or chaincode name for invocations.
    pub target: String,
    /// Transaction id the call carried.
    pub transaction_id: TransactionId,
}

/// In-memory handler for testing and local execution.
#[derive(Default)]
pub struct InMemoryHandler {
    /// Ledger contents.
    state: RwLock<HashMap<String, Vec<u8>>>,
    /// Chaincodes reachable through `handle_invoke_chaincode`.
    chaincodes: RwLock<HashMap<String, Arc<dyn Chaincode>>>,
    /// Every call received, in order.
    journal: RwLock<Vec<HandlerCall>>,
    /// Injected failures.
    failures: RwLock<HashMap<HandlerOperation, HandlerError>>,
}

impl InMemoryHandler {
    /// Create an empty handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `name` reachable through chaincode invocation.
    pub async fn register_chaincode(
        &self,
        name: impl Into<String>,
        chaincode: Arc<dyn Chaincode>,
    ) {
        self.chaincodes.write().await.insert(name.into(), chaincode);
    }

    /// Make every subsequent call to `operation` fail with `error`.
    pub async fn fail_on(&self, operation: HandlerOperation, error: HandlerError) {
        self.failures.write().await.insert(operation, error);
    }

    /// Stop failing `operation`.
    pub async fn clear_failure(&self, operation: HandlerOperation) {
        self.failures.write().await.remove(&operation);
    }

    /// Seed the ledger without journaling.
    pub async fn insert_state(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.state.write().await.insert(key.into(), value.into());
    }

    /// Current ledger value for `key`, without journaling.
    pub async fn state_value(&self, key: &str) -> Option<Vec<u8>> {
        self.state.read().await.get(key).cloned()
    }

    /// Copy of the call journal.
    pub async fn calls(&self) -> Vec<HandlerCall> {
        self.journal.read().await.clone()
    }

    /// Run `init` of a registered chaincode inside a fresh stub.
    pub async fn init_chaincode<A: AsRef<[u8]>>(
        &self,
        chaincode_name: &str,
        transaction_id: impl Into<TransactionId>,
        args: &[A],
    ) -> Result<Response, HandlerError> {
        let chaincode = self.lookup(chaincode_name).await?;
        let stub = ChaincodeStub::new(transaction_id, self, args);
        debug!(
            chaincode = chaincode_name,
            transaction_id = %stub.get_transaction_id(),
            "init"
        );
        Ok(chaincode.init(&stub).await)
    }

    async fn lookup(&self, chaincode_name: &str) -> Result<Arc<dyn Chaincode>, HandlerError> {
        self.chaincodes
            .read()
            .await
            .get(chaincode_name)
            .cloned()
            .ok_or_else(|| HandlerError::ChaincodeNotFound(chaincode_name.to_string()))
    }

    async fn begin(
        &self,
        operation: HandlerOperation,
        target: &str,
        transaction_id: &TransactionId,
    ) -> Result<(), HandlerError> {
        self.journal.write().await.push(HandlerCall {
            operation,
            target: target.to_string(),
            transaction_id: transaction_id.clone(),
        });
        match self.failures.read().await.get(&operation) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Handler for InMemoryHandler {
    async fn handle_get_state(
        &self,
        key: &str,
        transaction_id: &TransactionId,
    ) -> Result<Vec<u8>, HandlerError> {
        self.begin(HandlerOperation::GetState, key, transaction_id)
            .await?;
        // Absent keys read as empty, as on the peer.
        Ok(self.state.read().await.get(key).cloned().unwrap_or_default())
    }

    async fn handle_put_state(
        &self,
        key: &str,
        value: Vec<u8>,
        transaction_id: &TransactionId,
    ) -> Result<(), HandlerError> {
        self.begin(HandlerOperation::PutState, key, transaction_id)
            .await?;
        self.state.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn handle_delete_state(
        &self,
        key: &str,
        transaction_id: &TransactionId,
    ) -> Result<(), HandlerError> {
        self.begin(HandlerOperation::DeleteState, key, transaction_id)
            .await?;
        self.state.write().await.remove(key);
        Ok(())
    }

    async fn handle_invoke_chaincode(
        &self,
        chaincode_name: &str,
        function: &str,
        args: &[Vec<u8>],
        transaction_id: &TransactionId,
    ) -> Result<Vec<u8>, HandlerError> {
        self.begin(HandlerOperation::InvokeChaincode, chaincode_name, transaction_id)
            .await?;
        let chaincode = self.lookup(chaincode_name).await?;

        // The callee sees the function name as its first argument and runs in
        // the caller's transaction.
        let callee_args =
            std::iter::once(function.as_bytes()).chain(args.iter().map(Vec::as_slice));
        let stub = ChaincodeStub::new(transaction_id.clone(), self, callee_args);

        let response = chaincode.invoke(&stub).await;
        debug!(
            chaincode = chaincode_name,
            function,
            status = response.status,
            "chaincode invoked"
        );
        if response.is_ok() {
            Ok(response.payload)
        } else {
            Err(HandlerError::Rejected {
                status: response.status,
                message: response.message,
            })
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
