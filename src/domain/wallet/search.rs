//! Address search form.

use crate::error::ValidationError;
use crate::router::{Navigator, Route};
use crate::shared::WalletAddress;

/// Validate a typed address and build the wallet route for it.
///
/// Whitespace is trimmed and the address lowercased; nothing is fetched.
pub fn submit_search(input: &str) -> Result<Route, ValidationError> {
    WalletAddress::parse(input).map(Route::Wallet)
}

/// State of the search box.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    pub input: String,
    error: Option<String>,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Inline validation message, if the last submit was rejected.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Navigate to the wallet page, or keep the form with an inline error.
    pub fn submit(&mut self, navigator: &mut impl Navigator) -> Result<(), ValidationError> {
        match submit_search(&self.input) {
            Ok(route) => {
                self.error = None;
                navigator.navigate_to(route);
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}
