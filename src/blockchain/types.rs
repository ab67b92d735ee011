//! Chain-specific types and error definitions.

use thiserror::Error;

// Re-export wallet settings from config module to avoid duplication
pub use crate::config::schema::{WalletConfig, WalletKind};

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

/// Errors that can occur during wallet and contract operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// The user (or the node) refused the account authorization request.
    #[error("Account authorization denied: {0}")]
    AuthorizationDenied(String),

    /// Transaction could not be submitted or its receipt never arrived.
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// Transaction was reverted on-chain.
    #[error("Transaction reverted: {0}")]
    Reverted(String),

    /// Invalid private key format or derivation error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Amount could not be converted between display and smallest units.
    #[error(transparent)]
    Units(#[from] crate::blockchain::units::UnitsError),

    /// Chain configuration mismatch.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },

    /// No wallet provider detected, or no account to act for.
    #[error("Wallet not available: {0}")]
    NotAvailable(String),
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;

/// Outcome of initializing the provider bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeStatus {
    /// Provider present and account access granted.
    Authorized,
    /// Legacy provider bound without an authorization request.
    Legacy,
    /// Provider present but account access was refused.
    Denied { reason: String },
    /// No provider detected; every wallet operation fails.
    Unavailable,
}

impl BridgeStatus {
    /// Whether the bridge has a provider bound at all.
    pub fn has_provider(&self) -> bool {
        !matches!(self, BridgeStatus::Unavailable)
    }
}

/// Raw listing data as returned by `getMetadata`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMetadata {
    pub name: String,
    pub url: String,
    /// Price in the smallest currency unit (wei).
    pub price: alloy::primitives::U256,
}
