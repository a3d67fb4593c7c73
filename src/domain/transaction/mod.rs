//! Transaction domain — transaction records, page windows, the paginated view.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod pagination;
pub mod state;
pub mod wire;

use crate::shared::fmt::decimal;
use crate::shared::{Direction, WalletAddress};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use state::{LoadState, PageRequest, PageResponse, TransactionPageView, ViewStatus};

// ─── TransactionRecord ───────────────────────────────────────────────────────

/// A transaction touching the tracked wallet. Amounts are in ETH.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub hash: String,
    pub block_number: u64,
    pub timestamp: DateTime<Utc>,
    pub from_address: String,
    pub to_address: Option<String>,
    pub value: Decimal,
    pub fee: Decimal,
    pub direction: Direction,
    pub status: String,
}

impl TransactionRecord {
    /// Case-insensitive substring match on the hash. An empty query matches.
    pub fn hash_contains(&self, query: &str) -> bool {
        self.hash.to_lowercase().contains(&query.to_lowercase())
    }

    /// Whether `wallet` is the sender (highlighted in the table).
    pub fn is_from(&self, wallet: &WalletAddress) -> bool {
        wallet.matches(&self.from_address)
    }

    /// Whether `wallet` is the recipient (highlighted in the table).
    pub fn is_to(&self, wallet: &WalletAddress) -> bool {
        self.to_address
            .as_deref()
            .is_some_and(|to| wallet.matches(to))
    }

    /// Value column, six decimals.
    pub fn display_value(&self) -> String {
        decimal::eth(&self.value)
    }

    pub fn display_fee(&self) -> String {
        decimal::eth(&self.fee)
    }
}

// ─── PageWindow ──────────────────────────────────────────────────────────────

/// One page of a wallet's transactions plus the authoritative total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageWindow {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub items: Vec<TransactionRecord>,
}

impl PageWindow {
    pub fn total_pages(&self) -> u32 {
        pagination::total_pages(self.total, self.page_size)
    }

    /// Items on this page whose hash contains `query`, ignoring case.
    ///
    /// Only the loaded page is searched; `total` and the page count are
    /// unaffected.
    pub fn filter_by_hash(&self, query: &str) -> Vec<&TransactionRecord> {
        self.items
            .iter()
            .filter(|tx| tx.hash_contains(query))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
