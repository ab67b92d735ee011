//! UI state held by the view controller.

use alloy::primitives::{Address, TxHash};
use serde::{Deserialize, Serialize};

/// One dataset listing as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: u64,
    pub name: String,
    /// Download location. Stored, not rendered.
    pub url: String,
    /// Price in display units (ether), e.g. `"0.01"`.
    pub price: String,
}

impl Dataset {
    /// Selector label: `"<name> (<price> <symbol>)"`.
    pub fn label(&self, currency: &str) -> String {
        format!("{} ({} {})", self.name, self.price, currency)
    }
}

/// Result of the last access request or check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessStatus {
    Granted,
    Denied,
}

impl AccessStatus {
    pub fn from_granted(granted: bool) -> Self {
        if granted {
            AccessStatus::Granted
        } else {
            AccessStatus::Denied
        }
    }
}

impl std::fmt::Display for AccessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessStatus::Granted => write!(f, "Access Granted"),
            AccessStatus::Denied => write!(f, "Access Denied"),
        }
    }
}

/// Everything the page renders. Replaced wholesale on every update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub account: Option<Address>,
    pub datasets: Vec<Dataset>,
    pub selected: Option<Dataset>,
    pub access_status: Option<AccessStatus>,
    pub access_token: Option<TxHash>,
}

impl ViewState {
    /// The access token, but only while the status reads Access Granted.
    pub fn visible_token(&self) -> Option<TxHash> {
        match self.access_status {
            Some(AccessStatus::Granted) => self.access_token,
            _ => None,
        }
    }

    /// Look up a listing by identifier.
    pub fn dataset(&self, id: u64) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.id == id)
    }
}
