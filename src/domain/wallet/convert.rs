//! Conversion: wallet wire types → domain types (TryFrom + validation).

use super::wire::{WalletInfoResponse, WalletResponse};
use super::{Wallet, WalletPage};
use crate::error::ValidationError;
use crate::shared::WalletAddress;

impl TryFrom<WalletResponse> for Wallet {
    type Error = ValidationError;

    fn try_from(w: WalletResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            wallet_id: w.wallet_id,
            address: WalletAddress::parse(&w.address)?,
            label: w.label.unwrap_or_default(),
            owner_name: w.owner_name.filter(|name| !name.trim().is_empty()),
            network_name: w.network_name,
        })
    }
}

impl TryFrom<WalletInfoResponse> for WalletPage {
    type Error = ValidationError;

    fn try_from(resp: WalletInfoResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            wallet: resp.wallet.try_into()?,
            transactions: resp.transactions.into(),
        })
    }
}
