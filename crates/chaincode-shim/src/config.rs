//! Shim configuration from environment variables.

use crate::errors::ConfigError;
use std::env;

/// Configuration of the chaincode process hosting the stubs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShimConfig {
    /// Name the chaincode registers under.
    pub chaincode_name: String,

    /// Address of the peer the handler connects to.
    pub peer_address: String,

    /// Log level filter (trace, debug, info, warn, error or a full directive).
    pub log_level: String,

    /// Whether to emit JSON formatted logs.
    pub json_logs: bool,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            chaincode_name: "chaincode".to_string(),
            peer_address: "127.0.0.1:7051".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl ShimConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CORE_CHAINCODE_ID_NAME`: Chaincode name (default: chaincode)
    /// - `CORE_PEER_ADDRESS`: Peer address (default: 127.0.0.1:7051)
    /// - `CORE_CHAINCODE_LOGGING_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `CORE_CHAINCODE_JSON_LOGS`: Enable JSON logs (default: false)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            chaincode_name: lookup("CORE_CHAINCODE_ID_NAME").unwrap_or(defaults.chaincode_name),

            peer_address: lookup("CORE_PEER_ADDRESS").unwrap_or(defaults.peer_address),

            log_level: lookup("CORE_CHAINCODE_LOGGING_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            json_logs: lookup("CORE_CHAINCODE_JSON_LOGS")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(defaults.json_logs),
        }
    }

    /// Check that required values are present.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chaincode_name.trim().is_empty() {
            return Err(ConfigError::Invalid("chaincode name is empty".to_string()));
        }
        if self.peer_address.trim().is_empty() {
            return Err(ConfigError::Invalid("peer address is empty".to_string()));
        }
        Ok(())
    }
}
