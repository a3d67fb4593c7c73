//! # Wallet Tracker SDK
//!
//! Client-side building blocks for an Ethereum wallet tracker: wallet lookup,
//! a paginated and locally filtered transaction view, wallet registration and
//! a live ETH price widget with a synthetic trend series.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Newtypes, domain models, view-models, routing (always available)
//! 2. **HTTP** — `TrackerHttp` behind the `JsonTransport` capability
//! 3. **High-Level Client** — `TrackerClient` with nested sub-clients
//! 4. **Polling** — `QuotePoller`, a background tokio task with RAII shutdown
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wallet_tracker_sdk::prelude::*;
//!
//! let client = TrackerClient::builder()
//!     .api_url("http://localhost:8000")
//!     .build()?;
//!
//! let mut view = TransactionPageView::default();
//! let request = view.open("0x52908400098527886E0F7030069857D2E4169EE7")?;
//! let response = client.wallets().load(request).await;
//! view.apply(response);
//!
//! view.set_filter("ab12");
//! for tx in view.visible_transactions() {
//!     println!("{} {}", tx.hash, tx.direction);
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Application routes and the navigation capability.
pub mod router;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// JSON transport capability and its reqwest implementation.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `TrackerClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Direction, NetworkName, WalletAddress};

    // Domain types — quote
    pub use crate::domain::quote::{
        generate_series, generate_series_with_rng, PricePoint, PriceQuote, QuoteState,
        DEFAULT_POINT_COUNT,
    };

    // Domain types — transaction
    pub use crate::domain::transaction::{
        LoadState, PageRequest, PageResponse, PageWindow, TransactionPageView, TransactionRecord,
        ViewStatus,
    };

    // Domain types — wallet
    pub use crate::domain::wallet::{
        RegisterWalletRequest, RegistrationForm, RegistrationState, SearchForm, Wallet, WalletPage,
    };

    // Routing
    pub use crate::router::{History, Navigator, Route};

    // Errors
    pub use crate::error::{FetchError, HttpError, SdkError, ValidationError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_PAGE_SIZE, DEFAULT_QUOTE_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        QuotesClient, TrackerClient, TrackerClientBuilder, TransactionsClient, WalletsClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::{JsonTransport, TrackerHttp};

    // Polling
    #[cfg(all(feature = "poller", not(target_arch = "wasm32")))]
    pub use crate::domain::quote::poller::{PollerConfig, QuotePoller};
}
