//! Navigation guards
//!
//! A guard is asked about every navigation before the target page is shown.
//! It only reads state; it never changes it.

use crate::store::{AppState, WalletStatus};

/// Landing page every closed-wallet navigation is sent back to
pub const LANDING_PATH: &str = "/";

/// Pages that set up a wallet when none exists yet
pub const WALLET_SETUP_PATHS: [&str; 2] = ["/wallet/create", "/wallet/recover"];

/// What a guard wants done with a navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the navigation continue
    Proceed,

    /// Abandon this navigation and start one to the given path instead
    Redirect(String),

    /// Neither proceed nor redirect; the current page stays in place
    Block,
}

/// Hook evaluated before every navigation
pub trait NavigationGuard {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Decide on a navigation from `from` (None on initial load) to `to`
    fn check(&self, state: &AppState, from: Option<&str>, to: &str) -> GuardDecision;
}

/// Gates pages on the wallet lifecycle
///
/// - `unknown`, `nil`: only `/` and the wallet setup pages; anything else is blocked
/// - `closed`: only `/`; anything else is redirected to `/`
/// - open: anything but the wallet setup pages, which are blocked
#[derive(Debug, Clone, Copy, Default)]
pub struct WalletGuard;

impl NavigationGuard for WalletGuard {
    fn name(&self) -> &str {
        "wallet"
    }

    fn check(&self, state: &AppState, _from: Option<&str>, to: &str) -> GuardDecision {
        wallet_access(&state.wallet, to)
    }
}

/// Decision of the wallet guard for a navigation to `to`
pub fn wallet_access(status: &WalletStatus, to: &str) -> GuardDecision {
    let setup_page = WALLET_SETUP_PATHS.contains(&to);

    let decision = match status {
        WalletStatus::Unknown | WalletStatus::Nil => {
            if to == LANDING_PATH || setup_page {
                GuardDecision::Proceed
            } else {
                GuardDecision::Block
            }
        }
        WalletStatus::Closed => {
            if to == LANDING_PATH {
                GuardDecision::Proceed
            } else {
                GuardDecision::Redirect(LANDING_PATH.to_string())
            }
        }
        WalletStatus::Open(_) => {
            if setup_page {
                GuardDecision::Block
            } else {
                GuardDecision::Proceed
            }
        }
    };

    log::debug!("Wallet guard: status={} to={} -> {:?}", status, to, decision);
    decision
}
