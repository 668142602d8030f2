//! Configuration loading and config.js tests

use qitmeer_wallet_ui::config::{
    load_config, save_config, ConfigError, ConfigOverrides, UiConfig,
};
use tempfile::TempDir;

#[test]
fn test_default_points_at_local_wallet_api() {
    let config = UiConfig::default();
    assert_eq!(config.rpc_addr, "http://127.0.0.1:38130/api");
    assert!(config.rpc_user.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_api_url_appends_api_path() {
    let config = UiConfig::from_api_url("0.0.0.0:9000", "admin", "secret");
    assert_eq!(config.rpc_addr, "http://0.0.0.0:9000/api");
    assert_eq!(config.rpc_user, "admin");
    assert_eq!(config.rpc_pass, "secret");
}

#[test]
fn test_save_then_load_with_overrides() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("nested").join("config.json");

    let config = UiConfig::new("http://x", "u", "p");
    let written = save_config(&config, Some(&path)).expect("Failed to save config");
    assert_eq!(written, path);

    // File uses the injected config's field names
    let raw = std::fs::read_to_string(&path).expect("Failed to read config");
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["RPCAddr"], "http://x");
    assert_eq!(json["RPCUser"], "u");
    assert_eq!(json["RPCPass"], "p");

    let loaded = load_config(Some(&path), ConfigOverrides::new()).expect("Failed to load");
    assert_eq!(loaded, config);

    let overrides = ConfigOverrides {
        rpc_pass: Some("other".to_string()),
        ..Default::default()
    };
    let loaded = load_config(Some(&path), overrides).expect("Failed to load");
    assert_eq!(loaded.rpc_addr, "http://x");
    assert_eq!(loaded.rpc_pass, "other");
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("absent.json");

    let loaded = load_config(Some(&path), ConfigOverrides::new()).expect("Failed to load");
    assert_eq!(loaded, UiConfig::default());
    assert!(!path.exists(), "Loading must not create the file");
}

#[test]
fn test_invalid_addresses_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, r#"{"RPCAddr": "ftp://x"}"#).unwrap();

    assert!(matches!(
        load_config(Some(&path), ConfigOverrides::new()),
        Err(ConfigError::Invalid(_))
    ));

    std::fs::write(&path, "not json").unwrap();
    assert!(matches!(
        load_config(Some(&path), ConfigOverrides::new()),
        Err(ConfigError::Serialization(_))
    ));

    assert!(UiConfig::new("  ", "", "").validate().is_err());
}

#[test]
fn test_override_merge_precedence() {
    let env = ConfigOverrides {
        rpc_addr: Some("http://env".to_string()),
        rpc_user: Some("env-user".to_string()),
        rpc_pass: None,
    };
    let cli = ConfigOverrides {
        rpc_addr: Some("http://cli".to_string()),
        ..Default::default()
    };

    let mut config = UiConfig::new("http://file", "file-user", "file-pass");
    env.merge(cli).apply(&mut config);

    assert_eq!(config.rpc_addr, "http://cli");
    assert_eq!(config.rpc_user, "env-user");
    assert_eq!(config.rpc_pass, "file-pass");
}

#[test]
fn test_config_js_round_trip() {
    let config = UiConfig::new("http://127.0.0.1:38130/api", "admin", "123");

    let script = config.to_config_js().expect("Failed to render config.js");
    assert!(script.starts_with("window.QitmeerConfig = {"));
    assert!(script.trim_end().ends_with("};"));
    assert!(script.contains("\"RPCAddr\": \"http://127.0.0.1:38130/api\""));

    let parsed = UiConfig::from_config_js(&script).expect("Failed to parse config.js");
    assert_eq!(parsed, config);

    assert!(matches!(
        UiConfig::from_config_js("window.QitmeerConfig = null;"),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_config_js_reads_server_template() {
    // The wallet server writes bare keys and wraps the object in indentation
    let script = r#"
			//config
			window.QitmeerConfig = {
				RPCAddr: "http://127.0.0.1:38130/api",
				RPCUser: "admin",
				RPCPass: "p:w,RPCUser: \"x\""
			};
			"#;

    let parsed = UiConfig::from_config_js(script).expect("Failed to parse server config.js");
    assert_eq!(parsed.rpc_addr, "http://127.0.0.1:38130/api");
    assert_eq!(parsed.rpc_user, "admin");
    // String contents are never treated as keys
    assert_eq!(parsed.rpc_pass, "p:w,RPCUser: \"x\"");
}
