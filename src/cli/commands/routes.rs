//! Routing command implementations

use crate::router::{NavigationError, NavigationOutcome, Navigator, RouteError, RouteTable};
use crate::store::{AppState, WalletStatus};

/// Print every route with its page name
pub fn list() -> Result<(), RouteError> {
    let table = RouteTable::wallet()?;

    println!("Routes ({}):", table.routes().len());
    for route in table.routes() {
        println!("  {:<20} {}", route.pattern.as_str(), route.page);
    }

    Ok(())
}

/// Replay `paths` in order against a fixed wallet status
pub fn navigate(status: &str, paths: &[String]) -> Result<(), NavigationError> {
    let mut state = AppState::new();
    state.set_wallet_status(WalletStatus::parse(status));

    let mut navigator = Navigator::new(RouteTable::wallet()?);

    println!("Wallet status: {}", state.wallet);
    for path in paths {
        match navigator.push(&state, path) {
            Ok(outcome) => println!("  {:<20} {}", path, describe(&outcome)),
            Err(NavigationError::Route(RouteError::NotFound(p))) => {
                println!("  {:<20} not found ({})", path, p)
            }
            Err(e) => return Err(e),
        }
    }

    match navigator.current() {
        Some(route) => println!("Current page: {} ({})", route.page, route.path),
        None => println!("Current page: none"),
    }

    Ok(())
}

fn describe(outcome: &NavigationOutcome) -> String {
    match outcome {
        NavigationOutcome::Committed {
            route,
            redirected_from: Some(_),
        } => format!("redirected -> {} ({})", route.path, route.page),
        NavigationOutcome::Committed { route, .. } => {
            let params: Vec<String> = route
                .params
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            if params.is_empty() {
                format!("ok -> {}", route.page)
            } else {
                format!("ok -> {} [{}]", route.page, params.join(", "))
            }
        }
        NavigationOutcome::Blocked { .. } => "blocked".to_string(),
    }
}
