//! Wallet backend RPC layer
//!
//! JSON-RPC 2.0 over HTTP POST with basic auth.

pub mod client;
pub mod methods;

pub use client::{RpcClient, RpcError, DEFAULT_TIMEOUT};
