//! User-action errors.
//!
//! The `Display` text of each variant is the notice shown to the user;
//! the underlying cause is kept as the error source for logging.

use thiserror::Error;

use crate::blockchain::BlockchainError;

/// The two guarded user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    RequestAccess,
    CheckAccess,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::RequestAccess => write!(f, "Request access"),
            Action::CheckAccess => write!(f, "Check access"),
        }
    }
}

/// Why a user action did not complete.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Please select a dataset first.")]
    NoDatasetSelected,

    #[error("{0} is already in progress.")]
    InProgress(Action),

    #[error("Transaction failed.")]
    TransactionFailed(#[source] BlockchainError),

    #[error("Access check failed.")]
    AccessCheckFailed(#[source] BlockchainError),

    #[error("Could not load datasets.")]
    LoadFailed(#[source] BlockchainError),

    #[error("Could not connect wallet.")]
    WalletUnavailable(#[source] BlockchainError),
}

impl ActionError {
    /// Validation and busy errors touch no state and reach no wallet.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ActionError::NoDatasetSelected | ActionError::InProgress(_))
    }
}
