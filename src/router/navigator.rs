//! Navigator: runs guards, follows redirects and tracks the current page

use super::guard::{GuardDecision, NavigationGuard, WalletGuard};
use super::routes::{normalize_path, ResolvedRoute, RouteError, RouteTable};
use crate::store::AppState;

/// Redirect hops allowed within a single navigation
pub const MAX_REDIRECTS: usize = 8;

/// Errors that can occur while navigating
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("Route error: {0}")]
    Route(#[from] RouteError),

    #[error("Too many redirects navigating to '{0}'")]
    RedirectLoop(String),
}

/// How a navigation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The page was shown
    Committed {
        route: ResolvedRoute,
        /// Originally requested path when a guard redirected
        redirected_from: Option<String>,
    },

    /// A guard stopped the navigation; the current page is unchanged
    Blocked { path: String },
}

impl NavigationOutcome {
    /// Path the navigation ended on (the blocked target for a block)
    pub fn path(&self) -> &str {
        match self {
            NavigationOutcome::Committed { route, .. } => &route.path,
            NavigationOutcome::Blocked { path } => path,
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, NavigationOutcome::Blocked { .. })
    }
}

/// Page navigator
///
/// Guards are evaluated in registration order on every attempt; the first
/// one that does not proceed decides. Nothing is cached between attempts.
pub struct Navigator {
    table: RouteTable,
    guards: Vec<Box<dyn NavigationGuard>>,
    current: Option<ResolvedRoute>,
}

impl Navigator {
    /// Create a navigator with the wallet guard installed
    pub fn new(table: RouteTable) -> Self {
        let mut navigator = Self::without_guards(table);
        navigator.add_guard(Box::new(WalletGuard));
        navigator
    }

    pub fn without_guards(table: RouteTable) -> Self {
        Self {
            table,
            guards: Vec::new(),
            current: None,
        }
    }

    pub fn add_guard(&mut self, guard: Box<dyn NavigationGuard>) {
        self.guards.push(guard);
    }

    /// Page currently shown, `None` before the first committed navigation
    pub fn current(&self) -> Option<&ResolvedRoute> {
        self.current.as_ref()
    }

    /// Navigate to `path`
    ///
    /// The initial load is just the first call. A redirect starts a new
    /// navigation to its target, with the guards evaluated again.
    pub fn push(
        &mut self,
        state: &AppState,
        path: &str,
    ) -> Result<NavigationOutcome, NavigationError> {
        let requested = normalize_path(path).to_string();
        let mut target = requested.clone();
        let mut redirected_from = None;

        for _ in 0..=MAX_REDIRECTS {
            match self.run_guards(state, &target) {
                GuardDecision::Proceed => {
                    let route = self.table.resolve(&target)?;
                    log::debug!("Navigated to {} ({})", route.path, route.page);
                    self.current = Some(route.clone());
                    return Ok(NavigationOutcome::Committed {
                        route,
                        redirected_from,
                    });
                }
                GuardDecision::Redirect(next) => {
                    log::info!("Navigation to {} redirected to {}", target, next);
                    if redirected_from.is_none() {
                        redirected_from = Some(requested.clone());
                    }
                    target = normalize_path(&next).to_string();
                }
                GuardDecision::Block => {
                    log::info!("Navigation to {} blocked", target);
                    return Ok(NavigationOutcome::Blocked { path: target });
                }
            }
        }

        Err(NavigationError::RedirectLoop(requested))
    }

    fn run_guards(&self, state: &AppState, to: &str) -> GuardDecision {
        let from = self.current.as_ref().map(|route| route.path.as_str());

        for guard in &self.guards {
            let decision = guard.check(state, from, to);
            if decision != GuardDecision::Proceed {
                log::debug!("Guard '{}' decided {:?} for {}", guard.name(), decision, to);
                return decision;
            }
        }
        GuardDecision::Proceed
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("routes", &self.table.routes().len())
            .field("guards", &self.guards.len())
            .field("current", &self.current)
            .finish()
    }
}
