//! Transactions sub-client — a page of a wallet's transactions without the summary.

use crate::client::TrackerClient;
use crate::domain::transaction::wire::TransactionsPageResponse;
use crate::domain::transaction::PageWindow;
use crate::domain::wallet::client::page_query;
use crate::error::SdkError;
use crate::http::{JsonTransport, TrackerHttp};
use crate::shared::WalletAddress;

pub struct Transactions<'a, H = TrackerHttp> {
    pub(crate) client: &'a TrackerClient<H>,
}

impl<'a, H: JsonTransport> Transactions<'a, H> {
    pub async fn get(
        &self,
        address: &WalletAddress,
        page: u32,
        page_size: u32,
    ) -> Result<PageWindow, SdkError> {
        let query = page_query(page, page_size)?;
        let url = format!("{}/wallet/{}/transactions", self.client.api_url, address);
        let json = self.client.http.get_json(&url, &query).await?;
        let response: TransactionsPageResponse = serde_json::from_value(json)?;
        Ok(response.into())
    }

    /// First page at the client's default page size.
    pub async fn latest(&self, address: &WalletAddress) -> Result<PageWindow, SdkError> {
        self.get(address, 1, self.client.default_page_size).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpError;
    use crate::http::testing::FakeTransport;
    use crate::shared::Direction;
    use serde_json::json;

    const ADDR: &str = "0x1111111111111111111111111111111111111111";

    #[tokio::test]
    async fn test_get_parses_page() {
        let fake = FakeTransport::new().reply_ok(json!({
            "page": 1,
            "pageSize": 10,
            "total": 1,
            "items": [{
                "tx_hash": "0xfeed",
                "block_number": 5,
                "time_stamp": "2025-11-27T12:00:00+00:00",
                "from_address": "0x2222222222222222222222222222222222222222",
                "to_address": ADDR,
                "value_eth": 1.5,
                "tx_fee_eth": 0.00042,
                "direction": "in",
                "status": "success"
            }]
        }));
        let client = TrackerClient::builder()
            .api_url("http://api.test")
            .default_page_size(10)
            .build_with_transport(fake);
        let address = WalletAddress::parse(ADDR).unwrap();

        let window = client.transactions().latest(&address).await.unwrap();
        assert_eq!(window.items.len(), 1);
        assert_eq!(window.items[0].direction, Direction::In);
        assert!(window.items[0].is_to(&address));

        let calls = client.transport().calls();
        assert_eq!(calls[0].url, format!("http://api.test/wallet/{}/transactions", ADDR));
        assert_eq!(calls[0].query[1], ("pageSize".to_string(), "10".to_string()));
    }

    #[tokio::test]
    async fn test_unprocessable_bubbles_up() {
        let fake = FakeTransport::new().reply(Err(HttpError::Unprocessable(
            "Invalid address".to_string(),
        )));
        let client = TrackerClient::builder().build_with_transport(fake);
        let address = WalletAddress::parse(ADDR).unwrap();

        let err = client.transactions().get(&address, 1, 20).await.unwrap_err();
        assert!(matches!(err, SdkError::Http(HttpError::Unprocessable(_))));
    }
}
