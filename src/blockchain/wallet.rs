//! Local private-key wallet.
//!
//! # Security
//! - Private keys are loaded ONLY from environment variables
//! - Keys are never logged or serialized

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::Signer;

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Environment variable name for the private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "DATASET_ACCESS_PRIVATE_KEY";

/// A signer held in-process, standing in for a browser wallet.
#[derive(Clone)]
pub struct LocalKey {
    signer: PrivateKeySigner,
}

impl LocalKey {
    /// Create a key from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix)
    /// * `chain_id` - Optional chain ID for EIP-155 replay protection
    pub fn from_private_key(private_key_hex: &str, chain_id: Option<u64>) -> BlockchainResult<Self> {
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);

        let mut signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| BlockchainError::Wallet(format!("Invalid private key format: {}", e)))?;
        signer.set_chain_id(chain_id);

        tracing::info!(address = %signer.address(), "Local wallet key loaded");

        Ok(Self { signer })
    }

    /// Load the key from `DATASET_ACCESS_PRIVATE_KEY`.
    pub fn from_env(chain_id: Option<u64>) -> BlockchainResult<Self> {
        let private_key = std::env::var(PRIVATE_KEY_ENV_VAR).map_err(|_| {
            BlockchainError::Wallet(format!(
                "Environment variable {} not set",
                PRIVATE_KEY_ENV_VAR
            ))
        })?;

        Self::from_private_key(&private_key, chain_id)
    }

    /// The account this key signs for.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Wrap the key for use as a provider's signing filler.
    pub fn to_wallet(&self) -> EthereumWallet {
        EthereumWallet::from(self.signer.clone())
    }
}

impl std::fmt::Debug for LocalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalKey")
            .field("address", &self.signer.address())
            .finish()
    }
}
