//! Application routes and the injected navigation capability.

use crate::error::ValidationError;
use crate::shared::WalletAddress;

/// A page of the tracker app.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`: landing page with the live price widget.
    Home,
    /// `/tracker`: address search.
    Tracker,
    /// `/wallet/:address`: wallet summary and transactions.
    Wallet(WalletAddress),
    /// `/register`: wallet registration form.
    Register,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Tracker => "/tracker".to_string(),
            Route::Wallet(address) => format!("/wallet/{}", address),
            Route::Register => "/register".to_string(),
        }
    }

    /// Resolve a location path to a route.
    ///
    /// Unknown paths redirect to [`Route::Home`]. A `/wallet/:address` path
    /// whose address is malformed is an error, so no lookup is attempted.
    pub fn resolve(path: &str) -> Result<Route, ValidationError> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            [] => Route::Home,
            ["tracker"] => Route::Tracker,
            ["register"] => Route::Register,
            ["wallet", raw] => {
                let decoded = urlencoding::decode(raw)
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| raw.to_string());
                Route::Wallet(WalletAddress::parse(&decoded)?)
            }
            _ => Route::Home,
        };
        Ok(route)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Host-provided navigation (a browser router, a TUI screen stack, ...).
pub trait Navigator {
    fn navigate_to(&mut self, route: Route);
}

/// Records navigations in order. Handy for hosts without a real router.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<Route>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Route> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[Route] {
        &self.entries
    }
}

impl Navigator for History {
    fn navigate_to(&mut self, route: Route) {
        tracing::debug!(path = %route, "Navigating");
        self.entries.push(route);
    }
}
