//! Page routing
//!
//! Route table, navigation guards and the navigator that ties them together.

pub mod guard;
pub mod navigator;
pub mod routes;

pub use guard::{
    wallet_access, GuardDecision, NavigationGuard, WalletGuard, LANDING_PATH, WALLET_SETUP_PATHS,
};
pub use navigator::{NavigationError, NavigationOutcome, Navigator, MAX_REDIRECTS};
pub use routes::{
    normalize_path, Page, ResolvedRoute, Route, RouteError, RoutePattern, RouteTable,
    WALLET_ROUTES,
};
