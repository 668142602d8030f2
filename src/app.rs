//! Wallet UI application - main integration layer
//!
//! Coordinates config, state, navigation and the backend client.

use crate::config::{ConfigError, UiConfig};
use crate::router::{NavigationError, NavigationOutcome, Navigator, RouteError, RouteTable};
use crate::rpc::{RpcClient, RpcError};
use crate::store::{AppState, WalletStatus};

/// Errors that can occur in the application layer
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Route error: {0}")]
    Route(#[from] RouteError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),
}

/// The wallet UI
///
/// Owns the one [`AppState`] and hands it to the navigator on every
/// navigation, so guards always see the latest wallet status.
#[derive(Debug)]
pub struct WalletApp {
    config: UiConfig,
    state: AppState,
    navigator: Navigator,
    rpc: RpcClient,
}

impl WalletApp {
    /// Build the app from startup configuration
    ///
    /// Validates the route table and constructs the RPC client once.
    pub fn new(config: UiConfig) -> Result<Self, AppError> {
        config.validate()?;
        let rpc = RpcClient::new(&config)?;
        Self::with_client(config, rpc)
    }

    /// Build the app around an already configured client
    pub fn with_client(config: UiConfig, rpc: RpcClient) -> Result<Self, AppError> {
        let navigator = Navigator::new(RouteTable::wallet()?);
        log::info!("Wallet UI using RPC endpoint {}", rpc.base_url());

        Ok(Self {
            config,
            state: AppState::new(),
            navigator,
            rpc,
        })
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    /// Navigate to `path` under the current wallet status
    pub fn navigate(&mut self, path: &str) -> Result<NavigationOutcome, AppError> {
        Ok(self.navigator.push(&self.state, path)?)
    }

    /// Ask the backend for the wallet status and store it
    pub async fn refresh_wallet_status(&mut self) -> Result<WalletStatus, AppError> {
        let status = self.rpc.wallet_status().await?;
        self.state.set_wallet_status(status.clone());
        Ok(status)
    }

    /// Reload the node registry from the backend
    pub async fn refresh_nodes(&mut self) -> Result<usize, AppError> {
        let nodes = self.rpc.node_list().await?;
        self.state.replace_nodes(nodes);
        log::debug!("Loaded {} nodes", self.state.qitmeerd_list.len());
        Ok(self.state.qitmeerd_list.len())
    }

    /// Reload the account list from the backend
    ///
    /// The account service only exists while the wallet is open.
    pub async fn refresh_accounts(&mut self) -> Result<usize, AppError> {
        let balances = self.rpc.account_list().await?;
        self.state.replace_accounts(balances);
        log::debug!("Loaded {} accounts", self.state.accounts.len());
        Ok(self.state.accounts.len())
    }

    /// Open the wallet, then pick up the status it ends in
    pub async fn open_wallet(&mut self, password: &str) -> Result<WalletStatus, AppError> {
        self.rpc.open_wallet(password).await?;
        self.refresh_wallet_status().await
    }
}
