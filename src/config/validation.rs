//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the contract address and RPC URL parse
//! - Validate dataset identifiers (positive, unique, non-empty)
//! - Validate observability settings
//!
//! Returns all validation errors, not just the first.

use alloy::primitives::Address;
use std::collections::HashSet;
use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::AppConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("wallet.rpc_url '{0}' is not a valid URL")]
    InvalidRpcUrl(String),

    #[error("contract.address is required when a wallet provider is configured")]
    MissingContractAddress,

    #[error("contract.address '{0}' is not a valid address")]
    InvalidContractAddress(String),

    #[error("datasets.ids must not be empty")]
    NoDatasets,

    #[error("datasets.ids contains {0}; identifiers start at 1")]
    InvalidDatasetId(u64),

    #[error("datasets.ids lists {0} more than once")]
    DuplicateDatasetId(u64),

    #[error("datasets.currency_symbol must not be empty")]
    EmptyCurrencySymbol,

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("observability.metrics_address '{0}' is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(rpc_url) = &config.wallet.rpc_url {
        if rpc_url.parse::<url::Url>().is_err() {
            errors.push(ValidationError::InvalidRpcUrl(rpc_url.clone()));
        }
        if config.contract.address.is_empty() {
            errors.push(ValidationError::MissingContractAddress);
        }
    }

    if !config.contract.address.is_empty() && config.contract.address.parse::<Address>().is_err() {
        errors.push(ValidationError::InvalidContractAddress(
            config.contract.address.clone(),
        ));
    }

    if config.datasets.ids.is_empty() {
        errors.push(ValidationError::NoDatasets);
    }
    let mut seen = HashSet::new();
    for &id in &config.datasets.ids {
        if id == 0 {
            errors.push(ValidationError::InvalidDatasetId(id));
        } else if !seen.insert(id) {
            errors.push(ValidationError::DuplicateDatasetId(id));
        }
    }

    if config.datasets.currency_symbol.trim().is_empty() {
        errors.push(ValidationError::EmptyCurrencySymbol);
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
