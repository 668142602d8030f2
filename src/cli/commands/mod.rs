//! CLI command implementations

pub mod config;
pub mod routes;
pub mod wallet;
