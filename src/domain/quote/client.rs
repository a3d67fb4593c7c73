//! Quotes sub-client — ETH spot price from the public price API.

use super::convert::quote_for;
use super::wire::SimplePriceResponse;
use super::{PriceQuote, QuoteState};
use crate::client::TrackerClient;
use crate::error::SdkError;
use crate::http::{JsonTransport, TrackerHttp};
use crate::network::{QUOTE_ASSET_ID, QUOTE_VS_CURRENCY};

pub struct Quotes<'a, H = TrackerHttp> {
    pub(crate) client: &'a TrackerClient<H>,
}

impl<'a, H: JsonTransport> Quotes<'a, H> {
    /// Fetch the current ETH/USD quote with its 24h change.
    pub async fn get(&self) -> Result<PriceQuote, SdkError> {
        let query = [
            ("ids", QUOTE_ASSET_ID.to_string()),
            ("vs_currencies", QUOTE_VS_CURRENCY.to_string()),
            ("include_24hr_change", "true".to_string()),
        ];
        let json = self
            .client
            .http
            .get_json(&self.client.quote_url, &query)
            .await?;
        let response: SimplePriceResponse = serde_json::from_value(json)?;
        quote_for(response, QUOTE_ASSET_ID)
    }

    /// Fetch a quote and build the widget state from it.
    pub async fn refresh(&self, point_count: usize) -> QuoteState {
        QuoteState::from_fetch(self.get().await, point_count)
    }
}
