//! The view controller: owns UI state and runs the four user operations.
//!
//! State is an immutable [`ViewState`] snapshot behind an `ArcSwap`; every
//! update clones, edits and swaps, so readers never see a half-applied
//! change. Suspension points are exactly the wallet and contract calls.

use alloy::primitives::{Address, TxHash};
use arc_swap::ArcSwap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use crate::blockchain::{BlockchainError, BlockchainResult, DatasetContract, ProviderBridge};
use crate::config::DatasetsConfig;
use crate::controller::error::{Action, ActionError};
use crate::controller::guard::InFlight;
use crate::controller::render;
use crate::controller::state::{AccessStatus, Dataset, ViewState};
use crate::observability::metrics;

/// What became of a `load_datasets` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The list was replaced with this many listings.
    Applied(usize),
    /// A newer load started meanwhile; this result was dropped.
    Superseded,
}

/// Orchestrates the bridge and contract on behalf of the page.
pub struct ViewController {
    bridge: ProviderBridge,
    contract: Arc<dyn DatasetContract>,
    dataset_ids: Vec<u64>,
    currency: String,
    state: ArcSwap<ViewState>,
    load_generation: AtomicU64,
    requesting: InFlight,
    checking: InFlight,
}

impl ViewController {
    pub fn new(
        bridge: ProviderBridge,
        contract: Arc<dyn DatasetContract>,
        datasets: &DatasetsConfig,
    ) -> Self {
        Self {
            bridge,
            contract,
            dataset_ids: datasets.ids.clone(),
            currency: datasets.currency_symbol.clone(),
            state: ArcSwap::from_pointee(ViewState::default()),
            load_generation: AtomicU64::new(0),
            requesting: InFlight::new(),
            checking: InFlight::new(),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> Arc<ViewState> {
        self.state.load_full()
    }

    pub fn bridge(&self) -> &ProviderBridge {
        &self.bridge
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Render the current snapshot as the text page.
    pub fn render(&self) -> String {
        render::render_page(&self.state(), &self.currency)
    }

    fn update<F>(&self, edit: F)
    where
        F: Fn(&mut ViewState),
    {
        self.state.rcu(|current| {
            let mut next = ViewState::clone(current);
            edit(&mut next);
            next
        });
    }

    /// Take the wallet's first account as the connected account.
    ///
    /// An empty account list leaves the account unset without an error.
    pub async fn connect_wallet(&self) -> Result<Option<Address>, ActionError> {
        let accounts = self.bridge.get_accounts().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read wallet accounts");
            ActionError::WalletUnavailable(e)
        })?;

        let account = accounts.first().copied();
        match account {
            Some(address) => tracing::info!(account = %address, "Wallet connected"),
            None => tracing::warn!("Wallet returned no accounts"),
        }

        self.update(|state| state.account = account);
        Ok(account)
    }

    /// Fetch every configured listing, in order, and replace the list.
    ///
    /// Reads are sequential. Any failed read fails the whole load and
    /// leaves the previous list in place. After a successful load the
    /// selection is re-resolved by identifier, or cleared if it is gone.
    pub async fn load_datasets(&self) -> Result<LoadOutcome, ActionError> {
        let generation = self.load_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let span = tracing::info_span!("load_datasets", generation);

        async {
            let mut listings = Vec::with_capacity(self.dataset_ids.len());
            for &id in &self.dataset_ids {
                let raw = match self.contract.get_metadata(id).await {
                    Ok(raw) => raw,
                    Err(e) => {
                        tracing::error!(dataset_id = id, error = %e, "Failed to load dataset metadata");
                        metrics::record_metadata_load("failed");
                        return Err(ActionError::LoadFailed(e));
                    }
                };
                listings.push(Dataset {
                    id,
                    name: raw.name,
                    url: raw.url,
                    price: self.bridge.from_wei(raw.price),
                });
            }

            if self.load_generation.load(Ordering::SeqCst) != generation {
                tracing::debug!("Newer dataset load in progress, dropping this result");
                metrics::record_metadata_load("superseded");
                return Ok(LoadOutcome::Superseded);
            }

            let count = listings.len();
            self.update(|state| {
                state.selected = state
                    .selected
                    .as_ref()
                    .and_then(|current| listings.iter().find(|d| d.id == current.id).cloned());
                state.datasets = listings.clone();
            });

            tracing::info!(count, "Datasets loaded");
            metrics::record_metadata_load("applied");
            Ok(LoadOutcome::Applied(count))
        }
        .instrument(span)
        .await
    }

    /// Select a listing by identifier; `None` or an unknown id clears it.
    pub fn select_dataset(&self, id: Option<u64>) -> Option<Dataset> {
        let selected = id.and_then(|id| self.state().dataset(id).cloned());
        if let (Some(id), None) = (id, &selected) {
            tracing::debug!(dataset_id = id, "No such dataset, clearing selection");
        }
        self.update(|state| state.selected = selected.clone());
        selected
    }

    /// Pay for access to the selected dataset.
    ///
    /// On success the transaction hash becomes the access token and the
    /// status reads Access Granted. On failure nothing changes.
    pub async fn request_access(&self) -> Result<TxHash, ActionError> {
        let snapshot = self.state();
        let Some(dataset) = snapshot.selected.clone() else {
            tracing::warn!("Access requested with no dataset selected");
            metrics::record_access_request("rejected");
            return Err(ActionError::NoDatasetSelected);
        };
        let Some(_guard) = self.requesting.try_acquire() else {
            metrics::record_access_request("rejected");
            return Err(ActionError::InProgress(Action::RequestAccess));
        };

        let span = tracing::info_span!(
            "request_access",
            action_id = %Uuid::new_v4(),
            dataset_id = dataset.id
        );

        async {
            match self.submit_request(&dataset, snapshot.account).await {
                Ok(tx_hash) => {
                    self.update(|state| {
                        state.access_token = Some(tx_hash);
                        state.access_status = Some(AccessStatus::Granted);
                    });
                    tracing::info!(tx_hash = %tx_hash, "Access granted");
                    metrics::record_access_request("granted");
                    Ok(tx_hash)
                }
                Err(e) => {
                    tracing::error!(error = %e, "Access request transaction failed");
                    metrics::record_access_request("failed");
                    Err(ActionError::TransactionFailed(e))
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn submit_request(
        &self,
        dataset: &Dataset,
        account: Option<Address>,
    ) -> BlockchainResult<TxHash> {
        let from = account
            .ok_or_else(|| BlockchainError::NotAvailable("no connected account".to_string()))?;
        let value = self.bridge.to_wei(&dataset.price)?;
        self.contract.request_access(dataset.id, from, value).await
    }

    /// Ask the contract whether the connected account holds access to the
    /// selected dataset. Never touches the access token.
    pub async fn check_access(&self) -> Result<AccessStatus, ActionError> {
        let snapshot = self.state();
        let Some(dataset) = snapshot.selected.clone() else {
            tracing::warn!("Access check with no dataset selected");
            metrics::record_access_check("rejected");
            return Err(ActionError::NoDatasetSelected);
        };
        let Some(_guard) = self.checking.try_acquire() else {
            metrics::record_access_check("rejected");
            return Err(ActionError::InProgress(Action::CheckAccess));
        };

        let span = tracing::info_span!(
            "check_access",
            action_id = %Uuid::new_v4(),
            dataset_id = dataset.id
        );

        async {
            let result = match snapshot.account {
                Some(from) => self.contract.has_access(dataset.id, from).await,
                None => Err(BlockchainError::NotAvailable(
                    "no connected account".to_string(),
                )),
            };

            match result {
                Ok(granted) => {
                    let status = AccessStatus::from_granted(granted);
                    self.update(|state| state.access_status = Some(status));
                    tracing::info!(%status, "Access checked");
                    metrics::record_access_check(if granted { "granted" } else { "denied" });
                    Ok(status)
                }
                Err(e) => {
                    tracing::error!(error = %e, "Access check failed");
                    metrics::record_access_check("error");
                    Err(ActionError::AccessCheckFailed(e))
                }
            }
        }
        .instrument(span)
        .await
    }
}

impl std::fmt::Debug for ViewController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewController")
            .field("bridge", &self.bridge)
            .field("dataset_ids", &self.dataset_ids)
            .field("state", &self.state())
            .finish()
    }
}
