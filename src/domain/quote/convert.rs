//! Conversion: price wire types → `PriceQuote`.

use super::wire::{CoinPrice, SimplePriceResponse};
use super::PriceQuote;
use crate::error::{SdkError, ValidationError};
use rust_decimal::Decimal;

impl TryFrom<CoinPrice> for PriceQuote {
    type Error = ValidationError;

    fn try_from(price: CoinPrice) -> Result<Self, Self::Error> {
        if price.usd <= Decimal::ZERO {
            return Err(ValidationError::InvalidPrice);
        }
        Ok(Self {
            spot_price: price.usd,
            change_24h_percent: price.usd_24h_change,
        })
    }
}

/// Pull `asset_id` out of a `/simple/price` response.
pub(crate) fn quote_for(
    mut response: SimplePriceResponse,
    asset_id: &str,
) -> Result<PriceQuote, SdkError> {
    let price = response
        .remove(asset_id)
        .ok_or_else(|| SdkError::Other(format!("No price for {}", asset_id)))?;
    Ok(PriceQuote::try_from(price)?)
}
