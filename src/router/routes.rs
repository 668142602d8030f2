//! Route table: URL paths to pages
//!
//! Patterns are `/`-separated segments; a segment starting with `:` is a
//! named parameter matching exactly one non-empty path segment. Tables are
//! checked for overlapping patterns when built.

use std::collections::BTreeMap;

/// Errors raised while building or resolving routes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Route patterns '{first}' and '{second}' overlap")]
    Overlap { first: String, second: String },

    #[error("Page '{0}' is bound more than once")]
    DuplicatePage(&'static str),

    #[error("No route matches '{0}'")]
    NotFound(String),

    #[error("Page '{0}' has no route")]
    UnknownPage(&'static str),

    #[error("Missing parameter '{param}' for route '{pattern}'")]
    MissingParam { pattern: String, param: String },
}

/// Pages of the wallet UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Page {
    Index,
    WalletCreate,
    WalletRecover,
    Account,
    AccountNew,
    Address,
    TxSend,
    TxList,
    Backup,
    BackupImport,
    Node,
    NodeNew,
    /// Edit form for an existing node, selected by the `name` parameter
    NodeEdit,
}

impl Page {
    /// Route name of the page
    pub fn name(&self) -> &'static str {
        match self {
            Page::Index => "index",
            Page::WalletCreate => "walletcreate",
            Page::WalletRecover => "walletrecover",
            Page::Account => "account",
            Page::AccountNew => "accountnew",
            Page::Address => "address",
            Page::TxSend => "txsend",
            Page::TxList => "txlist",
            Page::Backup => "backup",
            Page::BackupImport => "import",
            Page::Node => "node",
            Page::NodeNew => "nodenew",
            Page::NodeEdit => "nodeedit",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The wallet UI's bindings, in evaluation order
pub const WALLET_ROUTES: &[(&str, Page)] = &[
    ("/", Page::Index),
    ("/wallet/create", Page::WalletCreate),
    ("/wallet/recover", Page::WalletRecover),
    ("/account", Page::Account),
    ("/account/new", Page::AccountNew),
    ("/address", Page::Address),
    ("/tx/send", Page::TxSend),
    ("/tx/list", Page::TxList),
    ("/backup", Page::Backup),
    ("/backup/import", Page::BackupImport),
    ("/node", Page::Node),
    ("/node/new", Page::NodeNew),
    ("/node/edit/:name", Page::NodeEdit),
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

impl Segment {
    fn compatible(&self, other: &Segment) -> bool {
        match (self, other) {
            (Segment::Static(a), Segment::Static(b)) => a == b,
            _ => true,
        }
    }
}

/// Parsed route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let invalid = |reason: &str| RouteError::InvalidPattern {
            pattern: raw.to_string(),
            reason: reason.to_string(),
        };

        if !raw.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }

        let mut segments = Vec::new();
        let mut seen_params: Vec<&str> = Vec::new();
        for part in raw.split('/').filter(|s| !s.is_empty()) {
            if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(invalid("parameter has no name"));
                }
                if seen_params.contains(&name) {
                    return Err(invalid("parameter name repeated"));
                }
                seen_params.push(name);
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Static(part.to_string()));
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Names of the parameters, in path order
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Match against split path segments, returning the captured parameters
    fn captures(&self, parts: &[&str]) -> Option<BTreeMap<String, String>> {
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(expected) if expected == part => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), (*part).to_string());
                }
            }
        }
        Some(params)
    }

    /// True when some path would match both patterns
    pub fn overlaps(&self, other: &RoutePattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| a.compatible(b))
    }

    /// Fill the pattern's parameters to produce a concrete path
    pub fn build(&self, params: &[(&str, &str)]) -> Result<String, RouteError> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Static(s) => path.push_str(s),
                Segment::Param(name) => {
                    let value = params
                        .iter()
                        .find(|(key, _)| key == name)
                        .map(|(_, value)| *value)
                        .filter(|value| !value.is_empty() && !value.contains('/'))
                        .ok_or_else(|| RouteError::MissingParam {
                            pattern: self.raw.clone(),
                            param: name.clone(),
                        })?;
                    path.push_str(value);
                }
            }
        }
        Ok(path)
    }
}

/// A pattern bound to a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub pattern: RoutePattern,
    pub page: Page,
}

/// Result of matching a path against the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Path that was matched, without query or fragment
    pub path: String,
    pub page: Page,
    pub params: BTreeMap<String, String>,
}

impl ResolvedRoute {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Validated, immutable list of routes
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table from `(pattern, page)` bindings
    ///
    /// Fails if a pattern is malformed, a page is bound twice, or two
    /// patterns could match the same path.
    pub fn new(bindings: &[(&str, Page)]) -> Result<Self, RouteError> {
        let mut routes: Vec<Route> = Vec::with_capacity(bindings.len());

        for (raw, page) in bindings {
            let pattern = RoutePattern::parse(raw)?;

            if routes.iter().any(|r| r.page == *page) {
                return Err(RouteError::DuplicatePage(page.name()));
            }
            if let Some(existing) = routes.iter().find(|r| r.pattern.overlaps(&pattern)) {
                return Err(RouteError::Overlap {
                    first: existing.pattern.as_str().to_string(),
                    second: pattern.as_str().to_string(),
                });
            }

            routes.push(Route {
                pattern,
                page: *page,
            });
        }

        Ok(Self { routes })
    }

    /// The wallet UI's route table
    pub fn wallet() -> Result<Self, RouteError> {
        Self::new(WALLET_ROUTES)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Find the route for `path`
    ///
    /// Query string and fragment are ignored; empty segments (doubled or
    /// trailing slashes) are skipped.
    pub fn resolve(&self, path: &str) -> Result<ResolvedRoute, RouteError> {
        let path = normalize_path(path);
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        self.routes
            .iter()
            .find_map(|route| {
                route.pattern.captures(&parts).map(|params| ResolvedRoute {
                    path: path.to_string(),
                    page: route.page,
                    params,
                })
            })
            .ok_or_else(|| RouteError::NotFound(path.to_string()))
    }

    /// Build the path that leads to `page`
    ///
    /// ```ignore
    /// let table = RouteTable::wallet()?;
    /// assert_eq!(table.path_for(Page::NodeEdit, &[("name", "local")])?, "/node/edit/local");
    /// ```
    pub fn path_for(&self, page: Page, params: &[(&str, &str)]) -> Result<String, RouteError> {
        self.routes
            .iter()
            .find(|route| route.page == page)
            .ok_or(RouteError::UnknownPage(page.name()))?
            .pattern
            .build(params)
    }
}

/// Strip query string and fragment; an empty path is the root
pub fn normalize_path(raw: &str) -> &str {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let path = &raw[..end];
    if path.is_empty() {
        "/"
    } else {
        path
    }
}
