//! Process-wide `tracing` setup for chaincode hosting stubs.
//!
//! Stub calls emit spans carrying `transaction_id`; this installs the
//! subscriber that prints them, plain for development or JSON for log
//! shipping. The filter comes from the resolved `ShimConfig::log_level`,
//! which already prefers `CORE_CHAINCODE_LOGGING_LEVEL` over `RUST_LOG`.

use crate::config::ShimConfig;
use crate::errors::ConfigError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter from `config.log_level`.
pub fn build_filter(config: &ShimConfig) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(&config.log_level).map_err(|e| ConfigError::InvalidLogFilter {
        directive: config.log_level.clone(),
        reason: e.to_string(),
    })
}

/// Install the global subscriber.
///
/// Fails if the filter is invalid or a subscriber is already installed.
pub fn init_logging(config: &ShimConfig) -> Result<(), ConfigError> {
    let env_filter = build_filter(config)?;

    let result = if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };
    result.map_err(|e| ConfigError::LoggingInit(e.to_string()))?;

    tracing::info!(
        chaincode = %config.chaincode_name,
        peer = %config.peer_address,
        "chaincode shim logging initialized"
    );
    Ok(())
}
