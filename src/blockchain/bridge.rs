//! Provider bridge: the one place that knows whether a wallet is usable.
//!
//! Built once at startup and handed to the view controller. Initialization
//! never fails outright; the outcome is recorded in [`BridgeStatus`] and
//! operations on an unusable bridge return errors instead.

use alloy::primitives::{Address, U256};
use std::sync::Arc;

use crate::blockchain::client::WalletTransport;
use crate::blockchain::types::{BlockchainError, BlockchainResult, BridgeStatus, WalletKind};
use crate::blockchain::units::{self, UnitsError};

/// Wallet provider plus the result of initializing it.
#[derive(Clone)]
pub struct ProviderBridge {
    transport: Option<Arc<dyn WalletTransport>>,
    status: BridgeStatus,
}

impl ProviderBridge {
    /// Bind a detected provider, requesting authorization where the
    /// provider supports it.
    pub async fn initialize(transport: Option<Arc<dyn WalletTransport>>) -> Self {
        let Some(transport) = transport else {
            tracing::error!(
                "No wallet provider detected. Configure wallet.rpc_url or set DATASET_ACCESS_RPC_URL"
            );
            return Self::unavailable();
        };

        let status = match transport.kind() {
            WalletKind::Legacy => {
                tracing::info!("Legacy wallet provider bound without authorization request");
                BridgeStatus::Legacy
            }
            WalletKind::Injected | WalletKind::LocalKey => match transport.request_accounts().await {
                Ok(accounts) => {
                    tracing::info!(accounts = accounts.len(), "Wallet account access granted");
                    BridgeStatus::Authorized
                }
                Err(e) => {
                    tracing::error!(error = %e, "User denied account access");
                    BridgeStatus::Denied {
                        reason: e.to_string(),
                    }
                }
            },
        };

        Self {
            transport: Some(transport),
            status,
        }
    }

    /// A bridge with no provider behind it.
    pub fn unavailable() -> Self {
        Self {
            transport: None,
            status: BridgeStatus::Unavailable,
        }
    }

    /// How initialization went.
    pub fn status(&self) -> &BridgeStatus {
        &self.status
    }

    /// Accounts currently authorized by the wallet. Callers use the first.
    pub async fn get_accounts(&self) -> BlockchainResult<Vec<Address>> {
        match &self.transport {
            Some(transport) => transport.accounts().await,
            None => Err(BlockchainError::NotAvailable(
                "no wallet provider detected".to_string(),
            )),
        }
    }

    /// Decimal ether string to base-10 wei string.
    pub fn to_smallest_unit(&self, amount: &str) -> Result<String, UnitsError> {
        units::to_smallest_unit(amount)
    }

    /// Base-10 wei string to decimal ether string.
    pub fn from_smallest_unit(&self, amount: &str) -> Result<String, UnitsError> {
        units::from_smallest_unit(amount)
    }

    /// Typed form of [`Self::to_smallest_unit`].
    pub fn to_wei(&self, amount: &str) -> Result<U256, UnitsError> {
        units::to_wei(amount)
    }

    /// Typed form of [`Self::from_smallest_unit`].
    pub fn from_wei(&self, amount: U256) -> String {
        units::from_wei(amount)
    }
}

impl std::fmt::Debug for ProviderBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderBridge")
            .field("status", &self.status)
            .field("kind", &self.transport.as_ref().map(|t| t.kind()))
            .finish()
    }
}
