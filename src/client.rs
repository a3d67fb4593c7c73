//! High-level client — `TrackerClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared transport and accessor methods.

use crate::domain::quote::client::Quotes;
use crate::domain::transaction::client::Transactions;
use crate::domain::transaction::TransactionPageView;
use crate::domain::wallet::client::Wallets;
use crate::error::{SdkError, ValidationError};
use crate::http::{JsonTransport, TrackerHttp};
use crate::network::{
    API_URL_ENV, DEFAULT_API_URL, DEFAULT_PAGE_SIZE, DEFAULT_QUOTE_URL, DEFAULT_TIMEOUT_SECS,
    MAX_PAGE_SIZE, QUOTE_URL_ENV,
};

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::quote::client::Quotes as QuotesClient;
pub use crate::domain::transaction::client::Transactions as TransactionsClient;
pub use crate::domain::wallet::client::Wallets as WalletsClient;

/// The primary entry point for the wallet tracker SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.wallets()`, `client.transactions()`, `client.quotes()`.
/// `H` is the transport; tests and non-reqwest hosts plug in their own.
pub struct TrackerClient<H = TrackerHttp> {
    pub(crate) http: Arc<H>,
    pub(crate) api_url: String,
    pub(crate) quote_url: String,
    pub(crate) default_page_size: u32,
}

impl TrackerClient<TrackerHttp> {
    pub fn builder() -> TrackerClientBuilder {
        TrackerClientBuilder::default()
    }
}

impl<H: JsonTransport> TrackerClient<H> {
    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn wallets(&self) -> Wallets<'_, H> {
        Wallets { client: self }
    }

    pub fn transactions(&self) -> Transactions<'_, H> {
        Transactions { client: self }
    }

    pub fn quotes(&self) -> Quotes<'_, H> {
        Quotes { client: self }
    }

    pub fn transport(&self) -> &H {
        &self.http
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn quote_url(&self) -> &str {
        &self.quote_url
    }

    pub fn default_page_size(&self) -> u32 {
        self.default_page_size
    }

    /// A fresh transaction view paging at the client's default page size.
    pub fn page_view(&self) -> TransactionPageView {
        TransactionPageView::new(self.default_page_size).unwrap_or_default()
    }
}

impl<H> Clone for TrackerClient<H> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
            api_url: self.api_url.clone(),
            quote_url: self.quote_url.clone(),
            default_page_size: self.default_page_size,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct TrackerClientBuilder {
    api_url: String,
    quote_url: String,
    timeout: Duration,
    default_page_size: u32,
}

impl Default for TrackerClientBuilder {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            quote_url: DEFAULT_QUOTE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TrackerClientBuilder {
    /// Defaults overridden by `WALLET_TRACKER_API_URL` and
    /// `WALLET_TRACKER_QUOTE_URL` when set.
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        if let Some(url) = env_url(API_URL_ENV) {
            builder.api_url = url;
        }
        if let Some(url) = env_url(QUOTE_URL_ENV) {
            builder.quote_url = url;
        }
        builder
    }

    pub fn api_url(mut self, url: &str) -> Self {
        self.api_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn quote_url(mut self, url: &str) -> Self {
        self.quote_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Clamped into `1..=100`, the backend's accepted range.
    pub fn default_page_size(mut self, page_size: u32) -> Self {
        self.default_page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    pub fn build(self) -> Result<TrackerClient, SdkError> {
        if self.api_url.is_empty() {
            return Err(ValidationError::EmptyField("api_url").into());
        }
        let http = TrackerHttp::new(self.timeout)?;
        Ok(self.build_with_transport(http))
    }

    /// Build around a caller-supplied transport.
    pub fn build_with_transport<H: JsonTransport>(self, transport: H) -> TrackerClient<H> {
        TrackerClient {
            http: Arc::new(transport),
            api_url: self.api_url,
            quote_url: self.quote_url,
            default_page_size: self.default_page_size,
        }
    }
}

fn env_url(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeTransport;

    #[test]
    fn test_builder_defaults() {
        let client = TrackerClient::builder().build_with_transport(FakeTransport::new());
        assert_eq!(client.api_url(), DEFAULT_API_URL);
        assert_eq!(client.quote_url(), DEFAULT_QUOTE_URL);
        assert_eq!(client.default_page_size(), 20);
    }

    #[test]
    fn test_builder_overrides() {
        let client = TrackerClient::builder()
            .api_url("https://tracker.example/")
            .quote_url("https://quotes.example/price")
            .default_page_size(500)
            .build_with_transport(FakeTransport::new());
        assert_eq!(client.api_url(), "https://tracker.example");
        assert_eq!(client.quote_url(), "https://quotes.example/price");
        assert_eq!(client.default_page_size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_page_view_uses_configured_page_size() {
        let client = TrackerClient::builder()
            .default_page_size(50)
            .build_with_transport(FakeTransport::new());
        let mut view = client.page_view();
        assert_eq!(view.page_size(), 50);

        let request = view
            .open("0x1111111111111111111111111111111111111111")
            .unwrap();
        assert_eq!(request.page_size, 50);
    }

    #[test]
    fn test_clone_shares_transport() {
        let client = TrackerClient::builder().build_with_transport(FakeTransport::new());
        let other = client.clone();
        assert!(std::ptr::eq(client.transport(), other.transport()));
    }

    #[test]
    fn test_build_rejects_empty_api_url() {
        let result = TrackerClient::builder().api_url("/").build();
        assert!(matches!(
            result,
            Err(SdkError::Validation(ValidationError::EmptyField("api_url")))
        ));
    }
}
