//! Wallet domain — wallet summaries, lookup, registration, address search.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod registration;
pub mod search;
pub mod wire;

use crate::domain::transaction::PageWindow;
use crate::shared::WalletAddress;
use serde::{Deserialize, Serialize};

pub use registration::{RegistrationForm, RegistrationState};
pub use search::SearchForm;
pub use wire::RegisterWalletRequest;

/// A tracked wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub wallet_id: i64,
    pub address: WalletAddress,
    pub label: String,
    pub owner_name: Option<String>,
    pub network_name: String,
}

/// A wallet summary together with one page of its transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletPage {
    pub wallet: Wallet,
    pub transactions: PageWindow,
}
