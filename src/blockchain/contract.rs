//! Dataset access contract binding.
//!
//! # Responsibilities
//! - Declare the contract ABI (`getMetadata`, `requestAccess`, `hasAccess`)
//! - Issue read calls and the payable access request
//! - Wait for the request's receipt and surface reverts as errors

use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::DynProvider;
use alloy::sol;
use async_trait::async_trait;
use std::time::Duration;

use crate::blockchain::client::bounded;
use crate::blockchain::types::{BlockchainError, BlockchainResult, RawMetadata};

sol! {
    /// Registry of paid datasets and the accounts allowed to use them.
    #[sol(rpc)]
    interface MedicalDataAccess {
        function getMetadata(uint256 id) external view returns (string memory name, string memory url, uint256 price);
        function requestAccess(uint256 id) external payable;
        function hasAccess(uint256 id) external view returns (bool granted);
    }
}

/// Calls into the dataset access contract.
#[async_trait]
pub trait DatasetContract: Send + Sync {
    /// Read a listing's name, download URL and price in wei.
    async fn get_metadata(&self, id: u64) -> BlockchainResult<RawMetadata>;

    /// Pay `value` wei from `from` for access to dataset `id`.
    ///
    /// Resolves once the transaction is mined; the hash is the access token.
    async fn request_access(&self, id: u64, from: Address, value: U256) -> BlockchainResult<TxHash>;

    /// Whether `from` currently holds access to dataset `id`.
    async fn has_access(&self, id: u64, from: Address) -> BlockchainResult<bool>;
}

/// Contract reached through the wallet provider.
#[derive(Clone)]
pub struct RpcDatasetContract {
    provider: DynProvider,
    address: Address,
    timeout: Option<Duration>,
}

impl RpcDatasetContract {
    pub fn new(provider: DynProvider, address: Address, timeout: Option<Duration>) -> Self {
        Self {
            provider,
            address,
            timeout,
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    fn instance(&self) -> MedicalDataAccess::MedicalDataAccessInstance<DynProvider> {
        MedicalDataAccess::new(self.address, self.provider.clone())
    }
}

#[async_trait]
impl DatasetContract for RpcDatasetContract {
    async fn get_metadata(&self, id: u64) -> BlockchainResult<RawMetadata> {
        let instance = self.instance();
        let metadata = bounded(self.timeout, "getMetadata", async {
            instance
                .getMetadata(U256::from(id))
                .call()
                .await
                .map_err(|e| BlockchainError::Rpc(e.to_string()))
        })
        .await?;

        Ok(RawMetadata {
            name: metadata.name,
            url: metadata.url,
            price: metadata.price,
        })
    }

    async fn request_access(&self, id: u64, from: Address, value: U256) -> BlockchainResult<TxHash> {
        let instance = self.instance();
        let receipt = bounded(self.timeout, "requestAccess", async {
            let pending = instance
                .requestAccess(U256::from(id))
                .from(from)
                .value(value)
                .send()
                .await
                .map_err(|e| BlockchainError::Transaction(e.to_string()))?;

            tracing::debug!(tx_hash = %pending.tx_hash(), dataset_id = id, "Access request submitted");

            pending
                .get_receipt()
                .await
                .map_err(|e| BlockchainError::Transaction(e.to_string()))
        })
        .await?;

        if !receipt.status() {
            return Err(BlockchainError::Reverted(format!(
                "requestAccess({}) in {}",
                id, receipt.transaction_hash
            )));
        }

        Ok(receipt.transaction_hash)
    }

    async fn has_access(&self, id: u64, from: Address) -> BlockchainResult<bool> {
        let instance = self.instance();
        bounded(self.timeout, "hasAccess", async {
            instance
                .hasAccess(U256::from(id))
                .from(from)
                .call()
                .await
                .map_err(|e| BlockchainError::Rpc(e.to_string()))
        })
        .await
    }
}

impl std::fmt::Debug for RpcDatasetContract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcDatasetContract")
            .field("address", &self.address)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Stand-in used when no wallet provider was detected.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedContract;

impl DetachedContract {
    fn error() -> BlockchainError {
        BlockchainError::NotAvailable("no wallet provider detected".to_string())
    }
}

#[async_trait]
impl DatasetContract for DetachedContract {
    async fn get_metadata(&self, _id: u64) -> BlockchainResult<RawMetadata> {
        Err(Self::error())
    }

    async fn request_access(&self, _id: u64, _from: Address, _value: U256) -> BlockchainResult<TxHash> {
        Err(Self::error())
    }

    async fn has_access(&self, _id: u64, _from: Address) -> BlockchainResult<bool> {
        Err(Self::error())
    }
}
