//! HTTP client layer — `TrackerHttp` behind the `JsonTransport` capability.

pub mod client;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::TrackerHttp;
pub use transport::JsonTransport;
