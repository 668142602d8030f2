//! Typed wrappers for the wallet backend's RPC methods

use super::client::{RpcClient, RpcError};
use crate::store::{AddressBalance, NodeInfo, NodeStatus, SeedInfo, WalletStatus};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
struct StatusReply {
    stats: String,
}

fn node_params(node: &NodeInfo) -> Vec<Value> {
    vec![
        json!(node.name),
        json!(node.rpc_server),
        json!(node.rpc_user),
        json!(node.rpc_password),
        json!(node.rpc_cert),
        json!(node.no_tls),
        json!(node.tls_skip_verify),
        json!(node.proxy),
        json!(node.proxy_user),
        json!(node.proxy_pass),
    ]
}

impl RpcClient {
    /// Current lifecycle state of the wallet (`wallet_walletStatus`)
    pub async fn wallet_status(&self) -> Result<WalletStatus, RpcError> {
        let reply: StatusReply = self.call("wallet_walletStatus", vec![]).await?;
        Ok(WalletStatus::parse(&reply.stats))
    }

    /// Load and open the wallet with its password
    pub async fn open_wallet(&self, password: &str) -> Result<(), RpcError> {
        self.call("wallet_openWallet", vec![json!(password)]).await
    }

    /// Generate a new seed and mnemonic for wallet creation
    pub async fn make_seed(&self) -> Result<SeedInfo, RpcError> {
        self.call("wallet_makeSeed", vec![]).await
    }

    /// Create a wallet from a hex seed
    pub async fn create_wallet(
        &self,
        seed: &str,
        wallet_pass: &str,
        unlock_pass: &str,
    ) -> Result<(), RpcError> {
        self.call(
            "wallet_createWallet",
            vec![json!(seed), json!(wallet_pass), json!(unlock_pass)],
        )
        .await
    }

    /// Create a wallet from a BIP39 mnemonic
    pub async fn recover_wallet(
        &self,
        mnemonic: &str,
        wallet_pass: &str,
        unlock_pass: &str,
    ) -> Result<(), RpcError> {
        self.call(
            "wallet_recoverWallet",
            vec![json!(mnemonic), json!(wallet_pass), json!(unlock_pass)],
        )
        .await
    }

    /// Nodes configured on the backend (`qitmeerd_list`)
    ///
    /// The backend answers `null` when none are configured.
    pub async fn node_list(&self) -> Result<Vec<NodeInfo>, RpcError> {
        let nodes: Option<Vec<NodeInfo>> = self.call("qitmeerd_list", vec![]).await?;
        Ok(nodes.unwrap_or_default())
    }

    /// Add a node; the backend ignores names it already knows
    pub async fn add_node(&self, node: &NodeInfo) -> Result<(), RpcError> {
        self.call("qitmeerd_add", node_params(node)).await
    }

    /// Replace the settings of the node with the same name
    pub async fn update_node(&self, node: &NodeInfo) -> Result<(), RpcError> {
        self.call("qitmeerd_update", node_params(node)).await
    }

    pub async fn remove_node(&self, name: &str) -> Result<(), RpcError> {
        self.call("qitmeerd_del", vec![json!(name)]).await
    }

    /// Switch the wallet to the named node
    pub async fn select_node(&self, name: &str) -> Result<(), RpcError> {
        self.call("qitmeerd_reset", vec![json!(name)]).await
    }

    pub async fn node_status(&self) -> Result<NodeStatus, RpcError> {
        self.call("qitmeerd_status", vec![]).await
    }

    // Account service, registered by the backend once the wallet is open

    /// Balance in coins of every account, keyed by account name
    pub async fn account_list(&self) -> Result<BTreeMap<String, f64>, RpcError> {
        let accounts: Option<BTreeMap<String, f64>> = self.call("account_list", vec![]).await?;
        Ok(accounts.unwrap_or_default())
    }

    /// Create an account; the wallet must be unlocked
    pub async fn create_account(&self, name: &str) -> Result<(), RpcError> {
        self.call("account_create", vec![json!(name)]).await
    }

    /// Derive a new address for `account` (the backend uses `default` when empty)
    pub async fn create_address(&self, account: &str) -> Result<String, RpcError> {
        self.call("account_createAddress", vec![json!(account)]).await
    }

    pub async fn list_addresses(&self, account: &str) -> Result<Vec<String>, RpcError> {
        let addresses: Option<Vec<String>> = self
            .call("account_listAddresses", vec![json!(account)])
            .await?;
        Ok(addresses.unwrap_or_default())
    }

    /// Name of the account that owns `address`
    pub async fn account_of_address(&self, address: &str) -> Result<String, RpcError> {
        self.call("account_getAccountByAddress", vec![json!(address)])
            .await
    }

    /// WIF-encoded private key of `address`; the wallet must be unlocked
    pub async fn dump_priv_key(&self, address: &str) -> Result<String, RpcError> {
        self.call("account_dumpPrivKey", vec![json!(address)]).await
    }

    /// Import a WIF-encoded key into the imported-keys account
    pub async fn import_wif_priv_key(
        &self,
        account: &str,
        wif: &str,
        rescan: bool,
    ) -> Result<(), RpcError> {
        self.call(
            "account_importWifPrivKey",
            vec![json!(account), json!(wif), json!(rescan)],
        )
        .await
    }

    /// Import a hex-encoded secp256k1 key into the imported-keys account
    pub async fn import_priv_key(
        &self,
        account: &str,
        hex_key: &str,
        rescan: bool,
    ) -> Result<(), RpcError> {
        self.call(
            "account_importPrivKey",
            vec![json!(account), json!(hex_key), json!(rescan)],
        )
        .await
    }

    /// Send `amount` coins from the default account; returns the transaction id
    ///
    /// The backend rejects transaction comments, so both comment fields are
    /// always sent empty.
    pub async fn send_to_address(&self, address: &str, amount: f64) -> Result<String, RpcError> {
        self.call(
            "account_sendToAddress",
            vec![json!(address), json!(amount), json!(""), json!("")],
        )
        .await
    }

    pub async fn address_balance(
        &self,
        address: &str,
        min_conf: i32,
    ) -> Result<AddressBalance, RpcError> {
        self.call("account_getBalance", vec![json!(address), json!(min_conf)])
            .await
    }

    /// Unspent outputs of `address`, passed through as the backend returns them
    pub async fn address_utxos(&self, address: &str) -> Result<Vec<Value>, RpcError> {
        let utxos: Option<Vec<Value>> = self.call("account_getUtxo", vec![json!(address)]).await?;
        Ok(utxos.unwrap_or_default())
    }
}
