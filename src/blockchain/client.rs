//! Wallet provider client.
//!
//! # Responsibilities
//! - Connect to the wallet's JSON-RPC endpoint
//! - Request account authorization and list accounts
//! - Bound RPC calls by the configured timeout, if any

use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use async_trait::async_trait;
use std::future::Future;
use std::time::{Duration, Instant};

use crate::blockchain::types::{
    BlockchainError, BlockchainResult, ChainId, WalletConfig, WalletKind,
};
use crate::blockchain::wallet::LocalKey;
use crate::observability::metrics;

/// The account-facing side of a wallet provider.
///
/// This is the seam the provider bridge talks to; RPC-backed and in-memory
/// implementations sit behind it.
#[async_trait]
pub trait WalletTransport: Send + Sync {
    /// What kind of provider this is.
    fn kind(&self) -> WalletKind;

    /// Ask the wallet to authorize account access.
    async fn request_accounts(&self) -> BlockchainResult<Vec<Address>>;

    /// Accounts currently authorized.
    async fn accounts(&self) -> BlockchainResult<Vec<Address>>;
}

/// Wallet provider reached over JSON-RPC.
#[derive(Clone)]
pub struct RpcWallet {
    provider: DynProvider,
    kind: WalletKind,
    local_key: Option<LocalKey>,
    rpc_url: String,
    timeout: Option<Duration>,
}

impl RpcWallet {
    /// Detect and bind the configured wallet provider.
    ///
    /// Returns `Ok(None)` when no provider endpoint is configured.
    pub fn connect(config: &WalletConfig) -> BlockchainResult<Option<Self>> {
        let Some(rpc_url) = config.rpc_url.as_deref() else {
            return Ok(None);
        };

        let url: url::Url = rpc_url.parse().map_err(|e| {
            BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", rpc_url, e))
        })?;

        let (provider, local_key) = match config.kind {
            WalletKind::LocalKey => {
                let key = LocalKey::from_env(config.chain_id)?;
                let provider = ProviderBuilder::new()
                    .wallet(key.to_wallet())
                    .connect_http(url)
                    .erased();
                (provider, Some(key))
            }
            WalletKind::Injected | WalletKind::Legacy => {
                (ProviderBuilder::new().connect_http(url).erased(), None)
            }
        };

        tracing::info!(rpc_url = %rpc_url, kind = ?config.kind, "Wallet provider bound");

        Ok(Some(Self {
            provider,
            kind: config.kind,
            local_key,
            rpc_url: rpc_url.to_string(),
            timeout: config.rpc_timeout(),
        }))
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> BlockchainResult<ChainId> {
        let id = bounded(self.timeout, "eth_chainId", async {
            self.provider
                .get_chain_id()
                .await
                .map_err(|e| BlockchainError::Rpc(e.to_string()))
        })
        .await?;
        Ok(ChainId(id))
    }

    /// Verify the connected chain ID matches the expected one.
    pub async fn verify_chain_id(&self, expected: u64) -> BlockchainResult<()> {
        let chain_id = self.get_chain_id().await?;
        if chain_id.0 != expected {
            return Err(BlockchainError::ChainMismatch {
                expected,
                actual: chain_id.0,
            });
        }
        Ok(())
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    /// Per-call timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[async_trait]
impl WalletTransport for RpcWallet {
    fn kind(&self) -> WalletKind {
        self.kind
    }

    async fn request_accounts(&self) -> BlockchainResult<Vec<Address>> {
        match (&self.kind, &self.local_key) {
            (WalletKind::LocalKey, Some(key)) => Ok(vec![key.address()]),
            (WalletKind::Injected, _) => {
                bounded(self.timeout, "eth_requestAccounts", async {
                    self.provider
                        .raw_request::<_, Vec<Address>>("eth_requestAccounts".into(), ())
                        .await
                        .map_err(|e| BlockchainError::AuthorizationDenied(e.to_string()))
                })
                .await
            }
            _ => self.accounts().await,
        }
    }

    async fn accounts(&self) -> BlockchainResult<Vec<Address>> {
        if let Some(key) = &self.local_key {
            return Ok(vec![key.address()]);
        }
        bounded(self.timeout, "eth_accounts", async {
            self.provider
                .get_accounts()
                .await
                .map_err(|e| BlockchainError::Rpc(e.to_string()))
        })
        .await
    }
}

impl std::fmt::Debug for RpcWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcWallet")
            .field("rpc_url", &self.rpc_url)
            .field("kind", &self.kind)
            .field("local_key", &self.local_key)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Run an RPC future, failing with `Timeout` if it outlives `limit`.
///
/// Records the call duration under `method` either way.
pub(crate) async fn bounded<T, F>(
    limit: Option<Duration>,
    method: &'static str,
    fut: F,
) -> BlockchainResult<T>
where
    F: Future<Output = BlockchainResult<T>>,
{
    let started = Instant::now();
    let result = match limit {
        Some(limit) => match tokio::time::timeout(limit, fut).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(method, timeout_secs = limit.as_secs(), "RPC timeout");
                Err(BlockchainError::Timeout(limit.as_secs()))
            }
        },
        None => fut.await,
    };
    metrics::record_rpc_duration(method, started.elapsed());
    result
}
