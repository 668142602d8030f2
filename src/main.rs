//! Qitmeer Wallet UI CLI
//!
//! Inspect routing and guard behaviour and talk to the wallet backend

use clap::Parser;
use qitmeer_wallet_ui::cli::args::{Cli, Commands, ConfigAction};
use qitmeer_wallet_ui::cli::commands;
use qitmeer_wallet_ui::config::ConfigOverrides;
use std::path::PathBuf;
use std::process;

fn main() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        rpc_addr: cli.rpc_addr.clone(),
        rpc_user: cli.rpc_user.clone(),
        rpc_pass: cli.rpc_pass.clone(),
    };
    let config_path = cli.config.as_ref().map(PathBuf::from);
    let config_path = config_path.as_deref();

    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Init { api_listen } => {
                commands::config::init(config_path, api_listen, overrides).map_err(Into::into)
            }
            ConfigAction::Show => commands::config::show(config_path, overrides).map_err(Into::into),
            ConfigAction::Js => commands::config::js(config_path, overrides).map_err(Into::into),
        },

        Commands::Routes => commands::routes::list().map_err(Into::into),

        Commands::Navigate { status, paths } => {
            commands::routes::navigate(&status, &paths).map_err(Into::into)
        }

        Commands::Status => match tokio::runtime::Runtime::new() {
            Ok(rt) => rt
                .block_on(commands::wallet::status(config_path, overrides))
                .map_err(Into::into),
            Err(e) => Err(format!("Failed to create async runtime: {}", e).into()),
        },

        Commands::Nodes => match tokio::runtime::Runtime::new() {
            Ok(rt) => rt
                .block_on(commands::wallet::nodes(config_path, overrides))
                .map_err(Into::into),
            Err(e) => Err(format!("Failed to create async runtime: {}", e).into()),
        },

        Commands::Accounts => match tokio::runtime::Runtime::new() {
            Ok(rt) => rt
                .block_on(commands::wallet::accounts(config_path, overrides))
                .map_err(Into::into),
            Err(e) => Err(format!("Failed to create async runtime: {}", e).into()),
        },

        Commands::Open { password } => match tokio::runtime::Runtime::new() {
            Ok(rt) => rt
                .block_on(commands::wallet::open(config_path, &password, overrides))
                .map_err(Into::into),
            Err(e) => Err(format!("Failed to create async runtime: {}", e).into()),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
