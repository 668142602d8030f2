//! CLI argument definitions using clap

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "qitmeer-wallet-ui",
    version,
    about = "Qitmeer Wallet UI - routing, navigation guard and wallet RPC client",
    long_about = None
)]
pub struct Cli {
    /// Path to the config file (default: ~/.qitmeer-wallet-ui/config.json)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Wallet RPC base URL (overrides config)
    #[arg(long, global = true)]
    pub rpc_addr: Option<String>,

    /// Wallet RPC user (overrides config)
    #[arg(long, global = true)]
    pub rpc_user: Option<String>,

    /// Wallet RPC password (overrides config)
    #[arg(long, global = true)]
    pub rpc_pass: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize or inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print the route table
    Routes,

    /// Replay navigations against a wallet status without contacting the backend
    Navigate {
        /// Wallet status: unknown, nil, closed, or any other value for an open wallet
        #[arg(short, long, default_value = "unknown")]
        status: String,

        /// Paths to navigate to, in order
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Query the wallet status from the backend
    Status,

    /// List the nodes configured on the backend
    Nodes,

    /// List the wallet's accounts and balances (wallet must be open)
    Accounts,

    /// Open the wallet on the backend
    Open {
        /// Wallet password
        #[arg(short, long)]
        password: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a config file with defaults and any overrides given
    Init {
        /// Wallet server API listen address the RPC URL is derived from
        #[arg(long)]
        api_listen: Option<String>,
    },

    /// Print the resolved configuration
    Show,

    /// Print the config.js script served to the browser
    Js,
}
