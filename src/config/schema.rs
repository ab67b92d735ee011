//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every section has defaults, so an empty file (or no file) is valid.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the dataset access client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Wallet provider settings.
    pub wallet: WalletConfig,

    /// Dataset access contract settings.
    pub contract: ContractConfig,

    /// Which listings to show and how.
    pub datasets: DatasetsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Kind of wallet provider to bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WalletKind {
    /// Provider that supports `eth_requestAccounts`.
    #[default]
    Injected,
    /// Older provider bound without an authorization request.
    Legacy,
    /// In-process private key signing through an RPC node.
    LocalKey,
}

/// Wallet provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WalletConfig {
    /// Provider kind.
    pub kind: WalletKind,

    /// JSON-RPC endpoint URL. No URL means no provider is present.
    pub rpc_url: Option<String>,

    /// Expected chain ID (e.g., 1 for Ethereum mainnet, 31337 for local Anvil).
    pub chain_id: Option<u64>,

    /// RPC request timeout in seconds (0 = wait indefinitely).
    pub rpc_timeout_secs: u64,
}

impl WalletConfig {
    /// The per-call timeout, if one is configured.
    pub fn rpc_timeout(&self) -> Option<Duration> {
        (self.rpc_timeout_secs > 0).then(|| Duration::from_secs(self.rpc_timeout_secs))
    }
}

/// Contract configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ContractConfig {
    /// Address of the dataset access contract.
    pub address: String,
}

/// Dataset listing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatasetsConfig {
    /// Identifiers to fetch, in display order.
    pub ids: Vec<u64>,

    /// Symbol shown next to prices.
    pub currency_symbol: String,
}

impl Default for DatasetsConfig {
    fn default() -> Self {
        Self {
            ids: vec![1, 2, 3],
            currency_symbol: "ETH".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.wallet.kind, WalletKind::Injected);
        assert!(config.wallet.rpc_url.is_none());
        assert!(config.wallet.rpc_timeout().is_none());
        assert_eq!(config.datasets.ids, vec![1, 2, 3]);
        assert_eq!(config.datasets.currency_symbol, "ETH");
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [wallet]
            kind = "local_key"
            rpc_url = "http://localhost:8545"
            rpc_timeout_secs = 15

            [contract]
            address = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
            "#,
        )
        .unwrap();

        assert_eq!(config.wallet.kind, WalletKind::LocalKey);
        assert_eq!(config.wallet.rpc_timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.datasets.ids, vec![1, 2, 3]);
        assert_eq!(config.observability.log_level, "info");
    }
}
