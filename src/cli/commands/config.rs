//! Config command implementations

use crate::config::{load_config, save_config, ConfigError, ConfigOverrides, UiConfig};
use std::path::Path;

/// Write a config file with defaults, the derived RPC URL and any overrides
pub fn init(
    config_path: Option<&Path>,
    api_listen: Option<String>,
    overrides: ConfigOverrides,
) -> Result<(), ConfigError> {
    let mut config = match api_listen {
        Some(listen) => UiConfig::from_api_url(&listen, "", ""),
        None => UiConfig::default(),
    };
    overrides.apply(&mut config);
    config.validate()?;

    let path = save_config(&config, config_path)?;

    println!("✓ Configuration initialized");
    println!("  Config file: {}", path.display());
    println!("  RPC address: {}", config.rpc_addr);

    Ok(())
}

/// Print the configuration after file, environment and CLI are merged
pub fn show(config_path: Option<&Path>, overrides: ConfigOverrides) -> Result<(), ConfigError> {
    let config = load_config(config_path, overrides)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Print the config.js script for the browser bundle
pub fn js(config_path: Option<&Path>, overrides: ConfigOverrides) -> Result<(), ConfigError> {
    let config = load_config(config_path, overrides)?;
    print!("{}", config.to_config_js()?);
    Ok(())
}
