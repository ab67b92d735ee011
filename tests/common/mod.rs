//! Shared in-memory wallet and contract for integration tests.

use alloy::primitives::{Address, TxHash, U256};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use dataset_access::blockchain::{
    BlockchainError, BlockchainResult, DatasetContract, ProviderBridge, RawMetadata,
    WalletTransport,
};
use dataset_access::config::{DatasetsConfig, WalletKind};
use dataset_access::controller::ViewController;

pub const ONE_ETHER: u128 = 1_000_000_000_000_000_000;

/// Wallet that hands out a fixed account list.
pub struct MockWallet {
    pub kind: WalletKind,
    pub accounts: Vec<Address>,
    /// Refuse the authorization request and expose no accounts.
    pub deny: bool,
}

#[async_trait]
impl WalletTransport for MockWallet {
    fn kind(&self) -> WalletKind {
        self.kind
    }

    async fn request_accounts(&self) -> BlockchainResult<Vec<Address>> {
        if self.deny {
            return Err(BlockchainError::AuthorizationDenied(
                "user rejected the request".to_string(),
            ));
        }
        Ok(self.accounts.clone())
    }

    async fn accounts(&self) -> BlockchainResult<Vec<Address>> {
        if self.deny {
            return Ok(Vec::new());
        }
        Ok(self.accounts.clone())
    }
}

/// How the next `request_access` calls resolve.
#[derive(Debug, Clone)]
pub enum RequestBehavior {
    Succeed(TxHash),
    Revert(String),
}

/// Contract with scripted listings, access grants and failures.
pub struct MockContract {
    pub listings: Mutex<HashMap<u64, RawMetadata>>,
    pub granted: Mutex<HashSet<(u64, Address)>>,
    pub request_behavior: Mutex<RequestBehavior>,
    pub fail_metadata_for: Mutex<Option<u64>>,
    pub fail_has_access: AtomicBool,
    /// Taken by the first `get_metadata` call, which waits on it.
    pub metadata_gate: Mutex<Option<Arc<Notify>>>,
    /// Taken by the first `request_access` call, which waits on it.
    pub request_gate: Mutex<Option<Arc<Notify>>>,
    /// Taken by the first `has_access` call, which waits on it.
    pub check_gate: Mutex<Option<Arc<Notify>>>,
    pub metadata_calls: Mutex<Vec<u64>>,
    pub requests: Mutex<Vec<(u64, Address, U256)>>,
    pub checks: Mutex<Vec<(u64, Address)>>,
}

#[allow(dead_code)]
impl MockContract {
    /// Listings 1..=3 priced 0.01, 0.02 and 0.5 ether.
    pub fn with_standard_listings() -> Self {
        let listings = [
            (1, "Cardiology", ONE_ETHER / 100),
            (2, "Oncology", ONE_ETHER / 50),
            (3, "Genomics", ONE_ETHER / 2),
        ]
        .into_iter()
        .map(|(id, name, price)| {
            (
                id,
                RawMetadata {
                    name: name.to_string(),
                    url: format!("https://data.example/{}", id),
                    price: U256::from(price),
                },
            )
        })
        .collect();

        Self {
            listings: Mutex::new(listings),
            granted: Mutex::new(HashSet::new()),
            request_behavior: Mutex::new(RequestBehavior::Succeed(TxHash::repeat_byte(0xab))),
            fail_metadata_for: Mutex::new(None),
            fail_has_access: AtomicBool::new(false),
            metadata_gate: Mutex::new(None),
            request_gate: Mutex::new(None),
            check_gate: Mutex::new(None),
            metadata_calls: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
            checks: Mutex::new(Vec::new()),
        }
    }

    pub fn set_request_behavior(&self, behavior: RequestBehavior) {
        *self.request_behavior.lock().unwrap() = behavior;
    }

    pub fn grant(&self, id: u64, account: Address) {
        self.granted.lock().unwrap().insert((id, account));
    }

    pub fn set_price(&self, id: u64, price: U256) {
        if let Some(listing) = self.listings.lock().unwrap().get_mut(&id) {
            listing.price = price;
        }
    }

    pub fn gate_metadata(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.metadata_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn gate_request(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.request_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn gate_check(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.check_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn check_count(&self) -> usize {
        self.checks.lock().unwrap().len()
    }
}

#[async_trait]
impl DatasetContract for MockContract {
    async fn get_metadata(&self, id: u64) -> BlockchainResult<RawMetadata> {
        self.metadata_calls.lock().unwrap().push(id);

        let gate = self.metadata_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if *self.fail_metadata_for.lock().unwrap() == Some(id) {
            return Err(BlockchainError::Rpc(format!("execution reverted for {}", id)));
        }
        self.listings
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| BlockchainError::Rpc(format!("no listing {}", id)))
    }

    async fn request_access(&self, id: u64, from: Address, value: U256) -> BlockchainResult<TxHash> {
        self.requests.lock().unwrap().push((id, from, value));

        let gate = self.request_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let behavior = self.request_behavior.lock().unwrap().clone();
        match behavior {
            RequestBehavior::Succeed(tx_hash) => {
                self.grant(id, from);
                Ok(tx_hash)
            }
            RequestBehavior::Revert(reason) => Err(BlockchainError::Reverted(reason)),
        }
    }

    async fn has_access(&self, id: u64, from: Address) -> BlockchainResult<bool> {
        self.checks.lock().unwrap().push((id, from));

        let gate = self.check_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if self.fail_has_access.load(Ordering::SeqCst) {
            return Err(BlockchainError::Rpc("connection refused".to_string()));
        }
        Ok(self.granted.lock().unwrap().contains(&(id, from)))
    }
}

/// The account every mock wallet hands out first.
#[allow(dead_code)]
pub fn user() -> Address {
    Address::repeat_byte(0x11)
}

/// Controller over an injected mock wallet with `accounts`.
#[allow(dead_code)]
pub async fn controller_with(
    contract: Arc<MockContract>,
    accounts: Vec<Address>,
) -> ViewController {
    controller_over(contract, accounts, false).await
}

/// Controller whose wallet refuses the authorization request.
#[allow(dead_code)]
pub async fn denied_controller(contract: Arc<MockContract>) -> ViewController {
    controller_over(contract, vec![user()], true).await
}

#[allow(dead_code)]
async fn controller_over(
    contract: Arc<MockContract>,
    accounts: Vec<Address>,
    deny: bool,
) -> ViewController {
    let wallet: Arc<dyn WalletTransport> = Arc::new(MockWallet {
        kind: WalletKind::Injected,
        accounts,
        deny,
    });
    let bridge = ProviderBridge::initialize(Some(wallet)).await;
    ViewController::new(bridge, contract, &DatasetsConfig::default())
}

/// Controller with the standard listings loaded and the wallet connected.
#[allow(dead_code)]
pub async fn loaded_controller() -> (ViewController, Arc<MockContract>) {
    let contract = Arc::new(MockContract::with_standard_listings());
    let controller = controller_with(contract.clone(), vec![user(), Address::repeat_byte(0x22)]).await;
    controller.connect_wallet().await.unwrap();
    controller.load_datasets().await.unwrap();
    (controller, contract)
}
