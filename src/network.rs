//! Network URL constants and request defaults.

/// Default wallet-tracker backend base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default spot-price endpoint (ETH/USD with 24h change).
pub const DEFAULT_QUOTE_URL: &str = "https://api.coingecko.com/api/v3/simple/price";

/// Asset id queried on the quote endpoint.
pub const QUOTE_ASSET_ID: &str = "ethereum";

/// Quote currency queried on the quote endpoint.
pub const QUOTE_VS_CURRENCY: &str = "usd";

/// Environment variable overriding [`DEFAULT_API_URL`].
pub const API_URL_ENV: &str = "WALLET_TRACKER_API_URL";

/// Environment variable overriding [`DEFAULT_QUOTE_URL`].
pub const QUOTE_URL_ENV: &str = "WALLET_TRACKER_QUOTE_URL";

/// Transactions per page when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page size the backend accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Request timeout in seconds (native only).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
