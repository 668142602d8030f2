//! Configuration types for the Qitmeer wallet UI
//!
//! Holds the RPC endpoint and credentials the UI uses to reach the wallet
//! backend. Field names match the `window.QitmeerConfig` object the wallet
//! server injects into the page, so the same JSON works in both places.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default wallet API listen address of the wallet server
pub const DEFAULT_API_LISTEN: &str = "127.0.0.1:38130";

/// UI startup configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Base URL of the wallet JSON-RPC endpoint
    #[serde(rename = "RPCAddr")]
    pub rpc_addr: String,

    /// Basic-auth user name
    #[serde(rename = "RPCUser", default)]
    pub rpc_user: String,

    /// Basic-auth password
    #[serde(rename = "RPCPass", default)]
    pub rpc_pass: String,
}

impl UiConfig {
    /// Create a configuration from explicit values
    pub fn new(
        rpc_addr: impl Into<String>,
        rpc_user: impl Into<String>,
        rpc_pass: impl Into<String>,
    ) -> Self {
        Self {
            rpc_addr: rpc_addr.into(),
            rpc_user: rpc_user.into(),
            rpc_pass: rpc_pass.into(),
        }
    }

    /// Build the configuration the wallet server hands to the UI
    ///
    /// The server exposes its JSON-RPC handler under `/api` on its listen
    /// address, so `127.0.0.1:38130` becomes `http://127.0.0.1:38130/api`.
    pub fn from_api_url(
        api_listen: &str,
        rpc_user: impl Into<String>,
        rpc_pass: impl Into<String>,
    ) -> Self {
        Self::new(format!("http://{}/api", api_listen), rpc_user, rpc_pass)
    }

    /// Render the `config.js` script served next to the UI bundle
    pub fn to_config_js(&self) -> Result<String, ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(format!("window.QitmeerConfig = {};\n", json))
    }

    /// Parse a `config.js` script
    ///
    /// Accepts both the JSON rendering of [`UiConfig::to_config_js`] and the
    /// wallet server's own template, whose object keys are bare identifiers.
    pub fn from_config_js(script: &str) -> Result<Self, ConfigError> {
        let start = script
            .find('{')
            .ok_or_else(|| ConfigError::Invalid("config.js has no object literal".to_string()))?;
        let end = script
            .rfind('}')
            .ok_or_else(|| ConfigError::Invalid("config.js object is not closed".to_string()))?;
        if end < start {
            return Err(ConfigError::Invalid(
                "config.js object is not closed".to_string(),
            ));
        }

        Ok(serde_json::from_str(&quote_bare_keys(&script[start..=end]))?)
    }

    /// Check the values are usable for building an RPC client
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rpc_addr.trim().is_empty() {
            return Err(ConfigError::Invalid("RPCAddr must not be empty".to_string()));
        }
        if !(self.rpc_addr.starts_with("http://") || self.rpc_addr.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "RPCAddr must be an http(s) URL, got '{}'",
                self.rpc_addr
            )));
        }
        Ok(())
    }
}

/// Quote bare identifier keys of a JS object literal so it reads as JSON
///
/// Identifiers followed by `:` outside string literals become keys; anything
/// else (`true`, `null`, string contents) is copied unchanged.
fn quote_bare_keys(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len() + 16);
    let mut chars = literal.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        if c == '"' {
            in_string = true;
            out.push(c);
        } else if c.is_ascii_alphabetic() || c == '_' || c == '$' {
            let mut ident = String::from(c);
            while let Some(&next) = chars.peek() {
                if next.is_ascii_alphanumeric() || next == '_' || next == '$' {
                    ident.push(next);
                    chars.next();
                } else {
                    break;
                }
            }

            let mut gap = String::new();
            while let Some(&next) = chars.peek() {
                if next.is_whitespace() {
                    gap.push(next);
                    chars.next();
                } else {
                    break;
                }
            }

            if chars.peek() == Some(&':') {
                out.push('"');
                out.push_str(&ident);
                out.push('"');
            } else {
                out.push_str(&ident);
            }
            out.push_str(&gap);
        } else {
            out.push(c);
        }
    }

    out
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from_api_url(DEFAULT_API_LISTEN, "", "")
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Config directory not found")]
    DirectoryNotFound,
}

/// Configuration overrides from CLI arguments or environment variables
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub rpc_addr: Option<String>,
    pub rpc_user: Option<String>,
    pub rpc_pass: Option<String>,
}

impl ConfigOverrides {
    /// Create empty overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Create overrides from environment variables
    ///
    /// Reads `QITMEER_RPC_ADDR`, `QITMEER_RPC_USER` and `QITMEER_RPC_PASS`.
    pub fn from_env() -> Self {
        Self {
            rpc_addr: std::env::var("QITMEER_RPC_ADDR").ok(),
            rpc_user: std::env::var("QITMEER_RPC_USER").ok(),
            rpc_pass: std::env::var("QITMEER_RPC_PASS").ok(),
        }
    }

    /// Merge with another set of overrides (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        if other.rpc_addr.is_some() {
            self.rpc_addr = other.rpc_addr;
        }
        if other.rpc_user.is_some() {
            self.rpc_user = other.rpc_user;
        }
        if other.rpc_pass.is_some() {
            self.rpc_pass = other.rpc_pass;
        }
        self
    }

    /// Apply these overrides on top of a configuration
    pub fn apply(self, config: &mut UiConfig) {
        if let Some(addr) = self.rpc_addr {
            config.rpc_addr = addr;
        }
        if let Some(user) = self.rpc_user {
            config.rpc_user = user;
        }
        if let Some(pass) = self.rpc_pass {
            config.rpc_pass = pass;
        }
    }
}

/// Get the default configuration directory path
///
/// Returns: `~/.qitmeer-wallet-ui/`
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".qitmeer-wallet-ui"))
        .ok_or(ConfigError::DirectoryNotFound)
}

/// Get the default configuration file path
///
/// Returns: `~/.qitmeer-wallet-ui/config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(default_config_dir()?.join("config.json"))
}

/// Load configuration from file with overrides
///
/// # Priority (highest to lowest):
/// 1. CLI overrides (passed as argument)
/// 2. Environment variables
/// 3. Config file
/// 4. Defaults
///
/// # Example
///
/// ```ignore
/// use qitmeer_wallet_ui::config::{load_config, ConfigOverrides};
///
/// let mut cli_overrides = ConfigOverrides::new();
/// cli_overrides.rpc_user = Some("admin".to_string());
///
/// let config = load_config(None, cli_overrides)?;
/// ```
pub fn load_config(
    config_path: Option<&Path>,
    cli_overrides: ConfigOverrides,
) -> Result<UiConfig, ConfigError> {
    let path = match config_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    let mut config = if path.exists() {
        log::debug!("Loading config from {}", path.display());
        let contents = std::fs::read_to_string(&path)?;
        serde_json::from_str(&contents)?
    } else {
        log::debug!("No config at {}, using defaults", path.display());
        UiConfig::default()
    };

    ConfigOverrides::from_env()
        .merge(cli_overrides)
        .apply(&mut config);

    config.validate()?;
    Ok(config)
}

/// Save configuration to file
///
/// Creates parent directories if they don't exist.
pub fn save_config(config: &UiConfig, config_path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let path = match config_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;

    Ok(path)
}
