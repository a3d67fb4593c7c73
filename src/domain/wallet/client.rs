//! Wallets sub-client — wallet lookup with a page of transactions, registration.

use crate::client::TrackerClient;
use crate::domain::transaction::{PageRequest, PageResponse};
use crate::domain::wallet::wire::{RegisterWalletRequest, WalletInfoResponse};
use crate::domain::wallet::WalletPage;
use crate::error::{FetchError, SdkError, ValidationError};
use crate::http::{JsonTransport, TrackerHttp};
use crate::network::MAX_PAGE_SIZE;
use crate::shared::WalletAddress;

pub struct Wallets<'a, H = TrackerHttp> {
    pub(crate) client: &'a TrackerClient<H>,
}

impl<'a, H: JsonTransport> Wallets<'a, H> {
    /// Wallet summary plus one page of its transactions.
    pub async fn get(
        &self,
        address: &WalletAddress,
        page: u32,
        page_size: u32,
    ) -> Result<WalletPage, SdkError> {
        let query = page_query(page, page_size)?;
        let url = format!("{}/wallet/{}", self.client.api_url, address);
        let json = self.client.http.get_json(&url, &query).await?;
        let response: WalletInfoResponse = serde_json::from_value(json)?;
        Ok(WalletPage::try_from(response)?)
    }

    /// Perform a view's [`PageRequest`], echoing its tag on the response.
    pub async fn load(&self, request: PageRequest) -> PageResponse {
        let result = self
            .get(&request.address, request.page, request.page_size)
            .await
            .map_err(FetchError::from);
        PageResponse {
            seq: request.seq,
            result,
        }
    }

    /// Register a wallet. Returns the backend's JSON reply.
    pub async fn register(
        &self,
        request: &RegisterWalletRequest,
    ) -> Result<serde_json::Value, SdkError> {
        let url = format!("{}/wallet/register", self.client.api_url);
        let body = serde_json::to_value(request)?;
        Ok(self.client.http.post_json(&url, &body).await?)
    }
}

/// `page` / `pageSize` query pairs. Out-of-range values never reach the wire.
pub(crate) fn page_query(
    page: u32,
    page_size: u32,
) -> Result<[(&'static str, String); 2], ValidationError> {
    if page == 0 {
        return Err(ValidationError::PageOutOfRange {
            page,
            total_pages: 0,
        });
    }
    if page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(ValidationError::InvalidPageSize {
            got: page_size,
            max: MAX_PAGE_SIZE,
        });
    }
    Ok([("page", page.to_string()), ("pageSize", page_size.to_string())])
}
