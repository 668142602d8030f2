//! Qitmeer Wallet UI
//!
//! Front-end core of the Qitmeer wallet: page routing with a wallet-status
//! navigation guard, the shared application state, and the JSON-RPC client
//! used to reach the wallet backend.

pub mod app;
pub mod cli;
pub mod config;
pub mod router;
pub mod rpc;
pub mod store;
