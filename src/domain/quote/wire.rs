//! Wire types for the public price endpoint.

use crate::shared::serde_util::{decimal_number, decimal_number_or_zero};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// `GET /simple/price`, keyed by asset id (`"ethereum"`).
pub type SimplePriceResponse = HashMap<String, CoinPrice>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoinPrice {
    #[serde(with = "decimal_number")]
    pub usd: Decimal,
    #[serde(default, with = "decimal_number_or_zero")]
    pub usd_24h_change: Decimal,
}
