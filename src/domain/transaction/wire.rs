//! Wire types for transaction responses (REST).

use crate::shared::serde_util::{decimal_number_or_zero, iso_timestamp};
use crate::shared::Direction;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// A single transaction row as the backend sends it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionResponse {
    pub tx_hash: String,
    pub block_number: u64,
    #[serde(with = "iso_timestamp")]
    pub time_stamp: DateTime<Utc>,
    pub from_address: String,
    #[serde(default)]
    pub to_address: Option<String>,
    #[serde(default, with = "decimal_number_or_zero")]
    pub value_eth: Decimal,
    #[serde(default, with = "decimal_number_or_zero")]
    pub tx_fee_eth: Decimal,
    pub direction: Direction,
    pub status: String,
}

/// One page of transactions: `GET /wallet/{address}/transactions`, and the
/// `transactions` object of `GET /wallet/{address}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionsPageResponse {
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    pub total: u64,
    #[serde(default)]
    pub items: Vec<TransactionResponse>,
}
