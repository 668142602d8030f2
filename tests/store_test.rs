//! Application state and model tests

use qitmeer_wallet_ui::store::{
    Account, AddressBalance, AppState, NodeInfo, NodeStatus, SeedInfo, WalletStatus,
};

fn node(name: &str, server: &str) -> NodeInfo {
    NodeInfo {
        name: name.to_string(),
        rpc_server: server.to_string(),
        rpc_user: "admin".to_string(),
        rpc_password: "123".to_string(),
        no_tls: true,
        ..Default::default()
    }
}

#[test]
fn test_state_defaults() {
    let state = AppState::new();

    assert_eq!(state.wallet, WalletStatus::Unknown);
    assert!(state.accounts.is_empty());
    assert!(state.qitmeerd_list.is_empty());
    assert_eq!(state, AppState::default());
}

#[test]
fn test_state_serializes_with_ui_field_names() {
    let mut state = AppState::new();
    state.accounts.push(Account::from("default"));
    state.replace_nodes(vec![node("local", "127.0.0.1:18130")]);

    let json = serde_json::to_value(&state).expect("Failed to serialize state");
    assert_eq!(json["Wallet"], "unknown");
    assert_eq!(json["Accounts"][0], "default");
    assert_eq!(json["QitmeerdList"]["local"]["RPCServer"], "127.0.0.1:18130");
    assert_eq!(json["QitmeerdList"]["local"]["NoTLS"], true);

    let back: AppState = serde_json::from_value(json).expect("Failed to deserialize state");
    assert_eq!(back, state);
}

#[test]
fn test_wallet_status_classification() {
    assert_eq!(WalletStatus::parse("unknown"), WalletStatus::Unknown);
    assert_eq!(WalletStatus::parse("nil"), WalletStatus::Nil);
    assert_eq!(WalletStatus::parse("closed"), WalletStatus::Closed);
    assert_eq!(
        WalletStatus::parse("lock"),
        WalletStatus::Open("lock".to_string())
    );
    // Matching is exact; anything unrecognised counts as open
    assert_eq!(
        WalletStatus::parse("Closed"),
        WalletStatus::Open("Closed".to_string())
    );

    assert!(WalletStatus::Unknown.is_missing());
    assert!(WalletStatus::Nil.is_missing());
    assert!(!WalletStatus::Closed.is_missing());
    assert!(!WalletStatus::Closed.is_open());

    let status: WalletStatus = "unlock".parse().unwrap();
    assert_eq!(status.to_string(), "unlock");
    assert_eq!(
        serde_json::to_string(&WalletStatus::Nil).unwrap(),
        "\"nil\""
    );
}

#[test]
fn test_replace_nodes_keys_by_name() {
    let mut state = AppState::new();
    state.replace_nodes(vec![
        node("local", "127.0.0.1:18130"),
        node("remote", "10.0.0.2:18130"),
        node("local", "127.0.0.1:28130"),
    ]);

    assert_eq!(state.qitmeerd_list.len(), 2);
    assert_eq!(state.node("local").unwrap().rpc_server, "127.0.0.1:28130");
    assert_eq!(state.node("remote").unwrap().url(), "http://10.0.0.2:18130");
    assert!(state.node("missing").is_none());

    state.replace_nodes(Vec::new());
    assert!(state.qitmeerd_list.is_empty());
}

#[test]
fn test_reset_restores_defaults() {
    let mut state = AppState::new();
    state.set_wallet_status(WalletStatus::Closed);
    state.accounts.push(Account::from("imported"));
    state.replace_nodes(vec![node("local", "127.0.0.1:18130")]);

    state.reset();
    assert_eq!(state, AppState::default());
}

#[test]
fn test_backend_payloads_deserialize() {
    // Node config as the wallet server stores it
    let json = r#"{
        "Name": "test",
        "RPCServer": "127.0.0.1:18131",
        "RPCUser": "u",
        "RPCPassword": "p",
        "RPCCert": "",
        "NoTLS": false,
        "TLSSkipVerify": true,
        "Proxy": "",
        "ProxyUser": "",
        "ProxyPass": ""
    }"#;
    let info: NodeInfo = serde_json::from_str(json).expect("Failed to parse node");
    assert_eq!(info.name, "test");
    assert!(info.tls_skip_verify);
    assert_eq!(info.url(), "https://127.0.0.1:18131");

    let status: NodeStatus =
        serde_json::from_str(r#"{"CurrentName":"test","MainOrder":10,"MainHeight":9}"#)
            .expect("Failed to parse node status");
    assert_eq!(status.current_name, "test");
    assert_eq!(status.main_order, 10);
    assert_eq!(status.main_height, 9);

    let seed: SeedInfo = serde_json::from_str(r#"{"seed":"00ff","mnemonic":"abandon"}"#)
        .expect("Failed to parse seed");
    assert_eq!(seed.seed, "00ff");

    let account = Account(serde_json::json!({"name": "savings", "index": 1}));
    assert_eq!(account.label(), Some("savings"));
    assert_eq!(Account(serde_json::json!(7)).label(), None);
}

#[test]
fn test_replace_accounts_keeps_name_and_balance() {
    let mut state = AppState::new();
    state.accounts.push("stale".into());

    state.replace_accounts(vec![
        ("default".to_string(), 12.5),
        ("imported".to_string(), 0.0),
    ]);

    assert_eq!(state.accounts.len(), 2);
    assert_eq!(state.accounts[0].label(), Some("default"));
    assert_eq!(state.accounts[0].balance(), Some(12.5));
    assert_eq!(state.accounts[1].label(), Some("imported"));

    // Plain labels carry no balance
    assert_eq!(Account::from("savings").balance(), None);
}

#[test]
fn test_address_balance_deserializes() {
    let balance: AddressBalance = serde_json::from_str(
        r#"{"TotalAmount":{"Value":300},"UnspentAmount":{"Value":200},"LockAmount":{"Value":100},
            "UnconfirmedAmount":{"Value":0},"SpendAmount":{"Value":50}}"#,
    )
    .expect("Failed to parse balance");

    assert_eq!(balance.total.value, 300);
    assert_eq!(balance.unspent.value, 200);
    assert_eq!(balance.locked.value, 100);
    assert_eq!(balance.spent.value, 50);
}
