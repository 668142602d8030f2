//! Application state shared by the navigator and the pages
//!
//! One [`AppState`] is created at startup and passed by reference to whatever
//! needs it. There is no persistence: a restart brings every field back to
//! its default.

pub mod models;

pub use models::{
    Account, AddressBalance, Amount, NodeInfo, NodeRegistry, NodeStatus, SeedInfo, WalletStatus,
};

use serde::{Deserialize, Serialize};

/// Wallet UI state
///
/// Fields are public and unguarded; the last writer wins. Only `wallet` is
/// consulted when deciding whether a navigation may proceed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(rename = "Wallet")]
    pub wallet: WalletStatus,

    #[serde(rename = "Accounts")]
    pub accounts: Vec<Account>,

    #[serde(rename = "QitmeerdList")]
    pub qitmeerd_list: NodeRegistry,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_wallet_status(&mut self, status: WalletStatus) {
        if self.wallet != status {
            log::debug!("Wallet status {} -> {}", self.wallet, status);
        }
        self.wallet = status;
    }

    /// Replace the account list with one entry per name and balance
    pub fn replace_accounts(&mut self, balances: impl IntoIterator<Item = (String, f64)>) {
        self.accounts = balances
            .into_iter()
            .map(|(name, balance)| Account::with_balance(name, balance))
            .collect();
    }

    /// Replace the node registry with `nodes`, keyed by name
    ///
    /// A later entry with the same name overwrites an earlier one.
    pub fn replace_nodes(&mut self, nodes: impl IntoIterator<Item = NodeInfo>) {
        self.qitmeerd_list = nodes
            .into_iter()
            .map(|node| (node.name.clone(), node))
            .collect();
    }

    pub fn node(&self, name: &str) -> Option<&NodeInfo> {
        self.qitmeerd_list.get(name)
    }

    /// Put every field back to its startup default
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
