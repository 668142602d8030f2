//! Backend command implementations

use crate::app::{AppError, WalletApp};
use crate::config::{load_config, ConfigOverrides};
use std::path::Path;

fn load_app(config_path: Option<&Path>, overrides: ConfigOverrides) -> Result<WalletApp, AppError> {
    let config = load_config(config_path, overrides)?;
    WalletApp::new(config)
}

/// Query and print the wallet status
pub async fn status(config_path: Option<&Path>, overrides: ConfigOverrides) -> Result<(), AppError> {
    let mut app = load_app(config_path, overrides)?;
    let status = app.refresh_wallet_status().await?;

    println!("Wallet status: {}", status);
    if status.is_missing() {
        println!();
        println!("No wallet yet. Create one at /wallet/create or recover at /wallet/recover.");
    }

    Ok(())
}

/// Query and print the configured nodes
pub async fn nodes(config_path: Option<&Path>, overrides: ConfigOverrides) -> Result<(), AppError> {
    let mut app = load_app(config_path, overrides)?;
    let count = app.refresh_nodes().await?;

    if count == 0 {
        println!("No nodes configured.");
        return Ok(());
    }

    println!("Nodes ({}):", count);
    println!();
    for node in app.state().qitmeerd_list.values() {
        println!("  {}", node.name);
        println!("    Address: {}", node.url());
        if !node.proxy.is_empty() {
            println!("    Proxy:   {}", node.proxy);
        }
    }

    Ok(())
}

/// Query and print the wallet's accounts
pub async fn accounts(config_path: Option<&Path>, overrides: ConfigOverrides) -> Result<(), AppError> {
    let mut app = load_app(config_path, overrides)?;
    let count = app.refresh_accounts().await?;

    if count == 0 {
        println!("No accounts.");
        return Ok(());
    }

    println!("Accounts ({}):", count);
    println!();
    for account in &app.state().accounts {
        let name = account.label().unwrap_or("?");
        match account.balance() {
            Some(balance) => println!("  {:<20} {}", name, balance),
            None => println!("  {}", name),
        }
    }

    Ok(())
}

/// Open the wallet and print the resulting status
pub async fn open(
    config_path: Option<&Path>,
    password: &str,
    overrides: ConfigOverrides,
) -> Result<(), AppError> {
    let mut app = load_app(config_path, overrides)?;
    let status = app.open_wallet(password).await?;

    println!("✓ Wallet opened");
    println!("  Status: {}", status);

    Ok(())
}
