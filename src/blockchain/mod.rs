//! Wallet and contract integration subsystem.
//!
//! # Data Flow
//! ```text
//! Config / environment (RPC URL, wallet kind, private key)
//!     → wallet.rs (local key loading, signing)
//!     → client.rs (RPC wallet: authorization, accounts, timeouts)
//!     → bridge.rs (initialization outcome, accounts, unit conversion)
//!     → contract.rs (getMetadata / requestAccess / hasAccess)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data
//! - Graceful degradation when no provider is reachable

pub mod bridge;
pub mod client;
pub mod contract;
pub mod types;
pub mod units;
pub mod wallet;

pub use bridge::ProviderBridge;
pub use client::{RpcWallet, WalletTransport};
pub use contract::{DatasetContract, DetachedContract, RpcDatasetContract};
pub use types::{BlockchainError, BlockchainResult, BridgeStatus, ChainId, RawMetadata};
pub use units::UnitsError;
pub use wallet::LocalKey;
