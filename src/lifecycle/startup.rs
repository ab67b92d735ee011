//! Startup orchestration.
//!
//! # Responsibilities
//! - Detect and bind the wallet provider
//! - Build the contract binding and the provider bridge
//! - Construct the view controller
//! - Run the on-load sequence (connect wallet, load datasets)
//!
//! Building never fails: a missing or refusing wallet leaves the bridge in
//! a degraded status and every later action reports its own error. The
//! on-load fetch does report failure so one-shot commands can stop early.

use alloy::primitives::Address;
use std::sync::Arc;

use crate::blockchain::{
    BridgeStatus, DatasetContract, DetachedContract, ProviderBridge, RpcDatasetContract,
    RpcWallet, WalletTransport,
};
use crate::config::AppConfig;
use crate::controller::{ActionError, LoadOutcome, ViewController};

/// Wired-up application.
pub struct Application {
    pub controller: Arc<ViewController>,
}

impl Application {
    pub fn bridge_status(&self) -> &BridgeStatus {
        self.controller.bridge().status()
    }
}

/// Bind the wallet and build the controller.
pub async fn build(config: &AppConfig) -> Application {
    let wallet = match RpcWallet::connect(&config.wallet) {
        Ok(wallet) => wallet,
        Err(e) => {
            tracing::error!(error = %e, "Failed to bind wallet provider");
            None
        }
    };

    if let (Some(wallet), Some(expected)) = (&wallet, config.wallet.chain_id) {
        match wallet.verify_chain_id(expected).await {
            Ok(()) => tracing::info!(chain_id = expected, "Chain verified"),
            // Don't fail startup - allow graceful degradation
            Err(e) => tracing::warn!(error = %e, "Chain verification failed"),
        }
    }

    let contract: Arc<dyn DatasetContract> = match &wallet {
        Some(wallet) => match config.contract.address.parse::<Address>() {
            Ok(address) => Arc::new(RpcDatasetContract::new(
                wallet.provider().clone(),
                address,
                wallet.timeout(),
            )),
            Err(e) => {
                tracing::error!(
                    address = %config.contract.address,
                    error = %e,
                    "Invalid contract address"
                );
                Arc::new(DetachedContract)
            }
        },
        None => Arc::new(DetachedContract),
    };

    let transport = wallet.map(|wallet| Arc::new(wallet) as Arc<dyn WalletTransport>);
    let bridge = ProviderBridge::initialize(transport).await;
    tracing::info!(status = ?bridge.status(), "Provider bridge initialized");

    Application {
        controller: Arc::new(ViewController::new(bridge, contract, &config.datasets)),
    }
}

/// Connect the wallet, then fetch the listings.
///
/// A wallet failure is logged and the listings are still fetched; the
/// result is that of the fetch.
pub async fn on_load(controller: &ViewController) -> Result<LoadOutcome, ActionError> {
    if let Err(e) = controller.connect_wallet().await {
        tracing::warn!(error = %e, "Loading datasets without a connected account");
    }
    controller.load_datasets().await
}
