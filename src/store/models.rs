//! Store data models
//!
//! Wallet status, account entries and node definitions held by [`AppState`].
//!
//! [`AppState`]: crate::store::AppState

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::Infallible;

/// Lifecycle state of the local wallet
///
/// The backend reports `nil` when no wallet file exists and `closed` when one
/// exists but is not loaded. Every other value (the server sends `lock` and
/// `unlock`) means the wallet is open and is kept verbatim in [`Open`].
///
/// [`Open`]: WalletStatus::Open
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WalletStatus {
    /// Not yet checked against the backend
    #[default]
    Unknown,

    /// No wallet exists
    Nil,

    /// Wallet exists but has not been opened
    Closed,

    /// Wallet is open; carries the raw status reported by the backend
    Open(String),
}

impl WalletStatus {
    /// Classify a raw status string
    pub fn parse(raw: &str) -> Self {
        match raw {
            "unknown" => WalletStatus::Unknown,
            "nil" => WalletStatus::Nil,
            "closed" => WalletStatus::Closed,
            other => WalletStatus::Open(other.to_string()),
        }
    }

    /// Raw status string, as the backend reports it
    pub fn as_str(&self) -> &str {
        match self {
            WalletStatus::Unknown => "unknown",
            WalletStatus::Nil => "nil",
            WalletStatus::Closed => "closed",
            WalletStatus::Open(raw) => raw,
        }
    }

    /// True when no usable wallet is known (`unknown` or `nil`)
    pub fn is_missing(&self) -> bool {
        matches!(self, WalletStatus::Unknown | WalletStatus::Nil)
    }

    pub fn is_open(&self) -> bool {
        matches!(self, WalletStatus::Open(_))
    }
}

impl std::str::FromStr for WalletStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(WalletStatus::parse(s))
    }
}

impl From<String> for WalletStatus {
    fn from(raw: String) -> Self {
        WalletStatus::parse(&raw)
    }
}

impl From<WalletStatus> for String {
    fn from(status: WalletStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for WalletStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account entry
///
/// Account pages own the shape of these entries; the store keeps them as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Account(pub serde_json::Value);

impl Account {
    /// Entry for a named account and its balance in coins
    pub fn with_balance(name: impl Into<String>, balance: f64) -> Self {
        Account(serde_json::json!({"name": name.into(), "balance": balance}))
    }

    /// Balance in coins, when the entry carries one
    pub fn balance(&self) -> Option<f64> {
        self.0.get("balance").and_then(|v| v.as_f64())
    }

    /// Display label: the entry itself when it is a string, else its `name`
    pub fn label(&self) -> Option<&str> {
        match &self.0 {
            serde_json::Value::String(name) => Some(name),
            serde_json::Value::Object(fields) => fields.get("name").and_then(|v| v.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for Account {
    fn from(name: &str) -> Self {
        Account(serde_json::Value::String(name.to_string()))
    }
}

/// Connection settings for one full node the wallet can talk to
///
/// Field names follow the wallet server's node config JSON.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeInfo {
    #[serde(rename = "Name")]
    pub name: String,

    /// Node RPC address, `host:port`
    #[serde(rename = "RPCServer", default)]
    pub rpc_server: String,

    #[serde(rename = "RPCUser", default)]
    pub rpc_user: String,

    #[serde(rename = "RPCPassword", default)]
    pub rpc_password: String,

    /// Path to the node's TLS certificate
    #[serde(rename = "RPCCert", default)]
    pub rpc_cert: String,

    #[serde(rename = "NoTLS", default)]
    pub no_tls: bool,

    #[serde(rename = "TLSSkipVerify", default)]
    pub tls_skip_verify: bool,

    /// SOCKS proxy address, empty when unused
    #[serde(rename = "Proxy", default)]
    pub proxy: String,

    #[serde(rename = "ProxyUser", default)]
    pub proxy_user: String,

    #[serde(rename = "ProxyPass", default)]
    pub proxy_pass: String,
}

impl NodeInfo {
    /// Node URL as the wallet dials it (scheme picked from `NoTLS`)
    pub fn url(&self) -> String {
        let scheme = if self.no_tls { "http" } else { "https" };
        format!("{}://{}", scheme, self.rpc_server)
    }
}

/// Known nodes keyed by name
pub type NodeRegistry = BTreeMap<String, NodeInfo>;

/// Sync state of the currently selected node, as reported by `qitmeerd_status`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeStatus {
    #[serde(rename = "CurrentName", default)]
    pub current_name: String,

    #[serde(rename = "MainOrder", default)]
    pub main_order: u32,

    #[serde(rename = "MainHeight", default)]
    pub main_height: u32,

    #[serde(rename = "Blake2bdDiff", default)]
    pub blake2bd_diff: String,

    #[serde(rename = "CuckarooDiff", default)]
    pub cuckaroo_diff: f64,

    #[serde(rename = "CuckatooDiff", default)]
    pub cuckatoo_diff: f64,
}

/// Amount in atoms, the smallest coin unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Amount {
    #[serde(rename = "Value", default)]
    pub value: i64,
}

/// Balance breakdown of one address, as returned by `account_getBalance`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddressBalance {
    #[serde(rename = "TotalAmount", default)]
    pub total: Amount,

    /// Spendable now
    #[serde(rename = "UnspentAmount", default)]
    pub unspent: Amount,

    #[serde(rename = "LockAmount", default)]
    pub locked: Amount,

    #[serde(rename = "UnconfirmedAmount", default)]
    pub unconfirmed: Amount,

    #[serde(rename = "SpendAmount", default)]
    pub spent: Amount,
}

/// Freshly generated wallet seed, as returned by `wallet_makeSeed`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedInfo {
    /// Hex-encoded HD seed
    pub seed: String,

    /// BIP39 mnemonic for the same seed
    pub mnemonic: String,
}
