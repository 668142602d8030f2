//! JSON-RPC client for the wallet backend

use crate::config::UiConfig;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Request, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Time a request may take before it is abandoned
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Errors that can occur talking to the wallet backend
///
/// Every failure is reported once; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("Invalid RPC address '{addr}': {reason}")]
    InvalidUrl { addr: String, reason: String },

    #[error("HTTP client error: {0}")]
    Client(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("RPC error {code}: {message}")]
    Server { code: i64, message: String },
}

impl From<reqwest::Error> for RpcError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RpcError::Timeout
        } else if err.is_builder() {
            RpcError::Client(err.to_string())
        } else {
            RpcError::Transport(err)
        }
    }
}

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

/// HTTP client bound to the wallet JSON-RPC endpoint
///
/// Built once at startup. Every request is a POST to the configured base
/// URL carrying JSON, basic auth and the request timeout. Cookies set by the
/// backend are kept and sent back.
pub struct RpcClient {
    http: Client,
    base_url: Url,
    user: String,
    pass: String,
    timeout: Duration,
    next_id: AtomicU64,
}

impl RpcClient {
    /// Create a client with the default 5 second timeout
    ///
    /// # Example
    ///
    /// ```ignore
    /// use qitmeer_wallet_ui::config::UiConfig;
    /// use qitmeer_wallet_ui::rpc::RpcClient;
    ///
    /// let client = RpcClient::new(&UiConfig::new("http://127.0.0.1:38130/api", "admin", "123"))?;
    /// let status = client.wallet_status().await?;
    /// ```
    pub fn new(config: &UiConfig) -> Result<Self, RpcError> {
        Self::with_timeout(config, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom timeout
    pub fn with_timeout(config: &UiConfig, timeout: Duration) -> Result<Self, RpcError> {
        let base_url = Url::parse(&config.rpc_addr).map_err(|e| RpcError::InvalidUrl {
            addr: config.rpc_addr.clone(),
            reason: e.to_string(),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .cookie_store(true)
            .build()
            .map_err(|e| RpcError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            user: config.rpc_user.clone(),
            pass: config.rpc_pass.clone(),
            timeout,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build the HTTP request for a call without sending it
    pub fn build_request(&self, method: &str, params: Vec<Value>) -> Result<Request, RpcError> {
        let body = RpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };

        let request = self
            .http
            .post(self.base_url.clone())
            .basic_auth(&self.user, Some(&self.pass))
            .timeout(self.timeout)
            .json(&body)
            .build()?;
        Ok(request)
    }

    /// Call `method` and decode its result
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, RpcError> {
        let request = self.build_request(method, params)?;
        log::debug!("RPC call {} -> {}", method, self.base_url);

        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::warn!("RPC call {} failed with HTTP {}", method, status);
            return Err(RpcError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: RpcResponse =
            serde_json::from_str(&body).map_err(|e| RpcError::InvalidResponse(e.to_string()))?;

        if let Some(err) = envelope.error {
            log::warn!("RPC call {} returned error {}: {}", method, err.code, err.message);
            return Err(RpcError::Server {
                code: err.code,
                message: err.message,
            });
        }

        serde_json::from_value(envelope.result.unwrap_or(Value::Null))
            .map_err(|e| RpcError::InvalidResponse(format!("{}: {}", method, e)))
    }
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("base_url", &self.base_url.as_str())
            .field("user", &self.user)
            .field("timeout", &self.timeout)
            .finish()
    }
}
