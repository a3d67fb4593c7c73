//! Wire types for wallet endpoints (REST).

use crate::domain::transaction::wire::TransactionsPageResponse;
use crate::shared::{NetworkName, WalletAddress};
use serde::{Deserialize, Serialize};

/// Wallet summary as the backend sends it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WalletResponse {
    pub wallet_id: i64,
    pub address: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    pub network_name: String,
}

/// `GET /wallet/{address}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WalletInfoResponse {
    pub wallet: WalletResponse,
    pub transactions: TransactionsPageResponse,
}

/// `POST /wallet/register` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterWalletRequest {
    pub address: WalletAddress,
    pub owner_name: String,
    pub label: String,
    pub network: NetworkName,
}
