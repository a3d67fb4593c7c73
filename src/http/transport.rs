//! The injected HTTP capability.
//!
//! Sub-clients never talk to reqwest directly; they go through
//! [`JsonTransport`], so views can be driven by an in-memory transport in
//! tests or by a host-provided fetch on other platforms.
//!
//! On native targets the futures are `Send` so a transport can back the
//! background quote poller. Browser fetch futures are `!Send`, so on wasm32
//! the bounds are dropped.

use crate::error::HttpError;
use std::future::Future;

/// Minimal JSON-over-HTTP capability used by every sub-client.
///
/// Implementations map transport failures and non-2xx statuses to
/// [`HttpError`]; a successful call yields the parsed JSON body.
#[cfg(not(target_arch = "wasm32"))]
pub trait JsonTransport: Send + Sync {
    /// `GET url?query`.
    fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> impl Future<Output = Result<serde_json::Value, HttpError>> + Send;

    /// `POST url` with a JSON body.
    fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> impl Future<Output = Result<serde_json::Value, HttpError>> + Send;
}

/// Minimal JSON-over-HTTP capability used by every sub-client.
#[cfg(target_arch = "wasm32")]
pub trait JsonTransport {
    /// `GET url?query`.
    fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> impl Future<Output = Result<serde_json::Value, HttpError>>;

    /// `POST url` with a JSON body.
    fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> impl Future<Output = Result<serde_json::Value, HttpError>>;
}
