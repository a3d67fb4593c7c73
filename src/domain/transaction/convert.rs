//! Conversions from wire types to domain types for transactions.

use super::wire::{TransactionResponse, TransactionsPageResponse};
use super::{PageWindow, TransactionRecord};

impl From<TransactionResponse> for TransactionRecord {
    fn from(t: TransactionResponse) -> Self {
        Self {
            hash: t.tx_hash,
            block_number: t.block_number,
            timestamp: t.time_stamp,
            from_address: t.from_address,
            to_address: t.to_address.filter(|to| !to.trim().is_empty()),
            value: t.value_eth,
            fee: t.tx_fee_eth,
            direction: t.direction,
            status: t.status,
        }
    }
}

impl From<TransactionsPageResponse> for PageWindow {
    fn from(p: TransactionsPageResponse) -> Self {
        Self {
            page: p.page.max(1),
            page_size: p.page_size.max(1),
            total: p.total,
            items: p.items.into_iter().map(TransactionRecord::from).collect(),
        }
    }
}
