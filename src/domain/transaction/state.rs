//! Transaction page view-model — app-owned, SDK-provided update logic.

use super::pagination;
use super::TransactionRecord;
use crate::domain::wallet::{Wallet, WalletPage};
use crate::error::{FetchError, ValidationError};
use crate::network::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::shared::WalletAddress;

/// A page load the view wants performed.
///
/// `seq` tags the request; only the response carrying the latest tag is
/// applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub seq: u64,
    pub address: WalletAddress,
    pub page: u32,
    pub page_size: u32,
}

/// The outcome of a [`PageRequest`], tagged with the request's `seq`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse {
    pub seq: u64,
    pub result: Result<WalletPage, FetchError>,
}

/// Lifecycle of the current page.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// No wallet selected yet.
    #[default]
    Idle,
    Loading,
    Loaded(WalletPage),
    Failed(FetchError),
}

/// What the table area should render.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewStatus<'a> {
    Idle,
    Loading,
    /// Replaces the whole view; nothing partial is shown.
    Failed(&'a str),
    /// The page (or the filter over it) has no rows.
    Empty,
    Rows(Vec<&'a TransactionRecord>),
}

/// View-model for a wallet's paginated transaction table.
///
/// The app owns instances of this type. Navigation methods return the
/// [`PageRequest`] to perform; the app performs it (e.g. with
/// `client.wallets().load(request)`) and feeds the tagged response back
/// through [`apply`](Self::apply). A response that arrives after a newer
/// request was issued is discarded.
#[derive(Debug, Clone)]
pub struct TransactionPageView {
    address: Option<WalletAddress>,
    page: u32,
    page_size: u32,
    filter_query: String,
    /// Last known total for the current address, kept while a page loads.
    total: Option<u64>,
    seq: u64,
    load: LoadState,
    /// Request issued by [`apply`](Self::apply) after the page fell out of range.
    follow_up: Option<PageRequest>,
}

impl Default for TransactionPageView {
    fn default() -> Self {
        Self {
            address: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            filter_query: String::new(),
            total: None,
            seq: 0,
            load: LoadState::Idle,
            follow_up: None,
        }
    }
}

impl TransactionPageView {
    pub fn new(page_size: u32) -> Result<Self, ValidationError> {
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(ValidationError::InvalidPageSize {
                got: page_size,
                max: MAX_PAGE_SIZE,
            });
        }
        Ok(Self {
            page_size,
            ..Self::default()
        })
    }

    // ── Navigation ───────────────────────────────────────────────────────

    /// Switch to `address`: back to page 1, filter cleared, old rows dropped.
    pub fn set_address(&mut self, address: WalletAddress) -> PageRequest {
        self.address = Some(address.clone());
        self.page = 1;
        self.total = None;
        self.filter_query.clear();
        self.issue(address)
    }

    /// Validate a raw address (e.g. a route parameter) and switch to it.
    ///
    /// An invalid address leaves the view untouched and issues no request.
    pub fn open(&mut self, raw_address: &str) -> Result<PageRequest, ValidationError> {
        let address = WalletAddress::parse(raw_address)?;
        Ok(self.set_address(address))
    }

    /// Jump to `page` of the current wallet.
    pub fn go_to_page(&mut self, page: u32) -> Result<PageRequest, ValidationError> {
        let Some(address) = self.address.clone() else {
            return Err(ValidationError::NoAddress);
        };
        pagination::check_page(page, self.total_pages())?;
        self.page = page;
        Ok(self.issue(address))
    }

    /// `None` on the last page.
    pub fn next_page(&mut self) -> Option<PageRequest> {
        if !self.can_next() {
            return None;
        }
        self.go_to_page(self.page + 1).ok()
    }

    /// `None` on the first page.
    pub fn prev_page(&mut self) -> Option<PageRequest> {
        if !self.can_prev() {
            return None;
        }
        self.go_to_page(self.page - 1).ok()
    }

    /// Re-request the current page (e.g. after a failure).
    pub fn reload(&mut self) -> Option<PageRequest> {
        let address = self.address.clone()?;
        pagination::check_page(self.page, self.total_pages()).ok()?;
        Some(self.issue(address))
    }

    pub fn can_prev(&self) -> bool {
        self.address.is_some() && self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.address.is_some() && self.page < self.total_pages()
    }

    /// Tag a new request and drop whatever page was shown.
    fn issue(&mut self, address: WalletAddress) -> PageRequest {
        self.follow_up = None;
        self.seq += 1;
        self.load = LoadState::Loading;
        PageRequest {
            seq: self.seq,
            address,
            page: self.page,
            page_size: self.page_size,
        }
    }

    // ── Responses ────────────────────────────────────────────────────────

    /// Apply a tagged response. Returns `false` if it was stale and dropped.
    ///
    /// If the reported total no longer reaches the current page (the wallet
    /// shrank), the view moves to the last page and stays `Loading`; the
    /// request for that page is then available from
    /// [`take_follow_up`](Self::take_follow_up).
    pub fn apply(&mut self, response: PageResponse) -> bool {
        let Some(address) = self.address.clone().filter(|_| response.seq == self.seq) else {
            tracing::debug!(
                seq = response.seq,
                current = self.seq,
                "Discarding stale page response"
            );
            return false;
        };

        match response.result {
            Ok(page) => {
                self.total = Some(page.transactions.total);
                let last = self.total_pages().max(1);
                if self.page > last {
                    tracing::debug!(page = self.page, last, "Page out of range, moving to last page");
                    self.page = last;
                    let request = self.issue(address);
                    self.follow_up = Some(request);
                } else {
                    self.load = LoadState::Loaded(page);
                }
            }
            Err(err) => self.load = LoadState::Failed(err),
        }
        true
    }

    /// The request [`apply`](Self::apply) issued for a clamped page, if any.
    pub fn take_follow_up(&mut self) -> Option<PageRequest> {
        self.follow_up.take()
    }

    // ── Filter ───────────────────────────────────────────────────────────

    /// Set the local hash filter. Never triggers a request.
    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter_query = query.into();
    }

    pub fn filter_query(&self) -> &str {
        &self.filter_query
    }

    /// Rows of the loaded page matching the filter.
    pub fn visible_transactions(&self) -> Vec<&TransactionRecord> {
        match &self.load {
            LoadState::Loaded(page) => page.transactions.filter_by_hash(&self.filter_query),
            _ => Vec::new(),
        }
    }

    // ── Derived state ────────────────────────────────────────────────────

    pub fn status(&self) -> ViewStatus<'_> {
        match &self.load {
            LoadState::Idle => ViewStatus::Idle,
            LoadState::Loading => ViewStatus::Loading,
            LoadState::Failed(err) => ViewStatus::Failed(&err.message),
            LoadState::Loaded(_) => {
                let rows = self.visible_transactions();
                if rows.is_empty() {
                    ViewStatus::Empty
                } else {
                    ViewStatus::Rows(rows)
                }
            }
        }
    }

    /// `ceil(total / page_size)` from the last loaded page; 0 if unknown.
    pub fn total_pages(&self) -> u32 {
        self.total
            .map(|t| pagination::total_pages(t, self.page_size))
            .unwrap_or(0)
    }

    /// Page buttons to render.
    pub fn page_buttons(&self) -> Vec<u32> {
        pagination::visible_pages(self.page, self.total_pages())
    }

    /// `"Page 2 of 5"`; an empty wallet reads `"Page 1 of 1"`.
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages().max(1))
    }

    pub fn address(&self) -> Option<&WalletAddress> {
        self.address.as_ref()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total(&self) -> Option<u64> {
        self.total
    }

    pub fn wallet(&self) -> Option<&Wallet> {
        match &self.load {
            LoadState::Loaded(page) => Some(&page.wallet),
            _ => None,
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::fixtures::{ten_with_two_matches, tx, window};
    use crate::domain::transaction::PageWindow;

    const ADDR_A: &str = "0x1111111111111111111111111111111111111111";
    const ADDR_B: &str = "0x2222222222222222222222222222222222222222";

    fn wallet_page(address: &str, transactions: PageWindow) -> WalletPage {
        WalletPage {
            wallet: Wallet {
                wallet_id: 1,
                address: WalletAddress::parse(address).unwrap(),
                label: "Main".to_string(),
                owner_name: None,
                network_name: "Sepolia".to_string(),
            },
            transactions,
        }
    }

    fn ok(request: &PageRequest, transactions: PageWindow) -> PageResponse {
        PageResponse {
            seq: request.seq,
            result: Ok(wallet_page(request.address.as_str(), transactions)),
        }
    }

    /// View on `ADDR_A` with a loaded page 1 of `total` rows at size 10.
    fn loaded(total: u64) -> TransactionPageView {
        let mut view = TransactionPageView::new(10).unwrap();
        let request = view.open(ADDR_A).unwrap();
        assert!(view.apply(ok(&request, window(1, 10, total, ten_with_two_matches()))));
        view
    }

    #[test]
    fn test_open_issues_first_page() {
        let mut view = TransactionPageView::default();
        assert_eq!(view.status(), ViewStatus::Idle);

        let request = view.open(ADDR_A).unwrap();
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(view.status(), ViewStatus::Loading);
    }

    #[test]
    fn test_invalid_address_issues_nothing() {
        let mut view = TransactionPageView::default();
        assert!(matches!(
            view.open("0x123"),
            Err(ValidationError::InvalidAddress(_))
        ));
        assert!(view.address().is_none());
        assert_eq!(view.load_state(), &LoadState::Idle);
    }

    #[test]
    fn test_switching_address_resets_page() {
        let mut view = loaded(95);
        let request = view.go_to_page(4).unwrap();
        assert!(view.apply(ok(&request, window(4, 10, 95, vec![tx("0x40")]))));
        view.set_filter("0x4");

        let request = view.open(ADDR_B).unwrap();
        assert_eq!(request.page, 1);
        assert_eq!(request.address.as_str(), ADDR_B);
        assert_eq!(view.page(), 1);
        assert_eq!(view.total(), None);
        assert_eq!(view.filter_query(), "");
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut view = TransactionPageView::new(10).unwrap();
        let first = view.open(ADDR_A).unwrap();
        let second = view.open(ADDR_B).unwrap();

        assert!(!view.apply(ok(&first, window(1, 10, 3, vec![tx("0xaaa")]))));
        assert_eq!(view.status(), ViewStatus::Loading);

        assert!(view.apply(ok(&second, window(1, 10, 1, vec![tx("0xbbb")]))));
        assert_eq!(
            view.wallet().map(|w| w.address.as_str()),
            Some(ADDR_B)
        );
        assert_eq!(view.visible_transactions()[0].hash, "0xbbb");
    }

    #[test]
    fn test_filter_is_local_to_loaded_page() {
        let mut view = loaded(95);
        let buttons = view.page_buttons();

        view.set_filter("AB12");
        let hashes: Vec<_> = view
            .visible_transactions()
            .iter()
            .map(|t| t.hash.as_str())
            .collect();
        assert_eq!(hashes, ["0x9fab12c0", "0xAB12ffee"]);
        assert_eq!(view.total(), Some(95));
        assert_eq!(view.total_pages(), 10);
        assert_eq!(view.page_buttons(), buttons);

        view.set_filter("nothing-here");
        assert_eq!(view.status(), ViewStatus::Empty);
    }

    #[test]
    fn test_page_bounds_are_enforced() {
        let mut view = loaded(95);
        assert_eq!(
            view.go_to_page(0),
            Err(ValidationError::PageOutOfRange {
                page: 0,
                total_pages: 10
            })
        );
        assert_eq!(
            view.go_to_page(11),
            Err(ValidationError::PageOutOfRange {
                page: 11,
                total_pages: 10
            })
        );
        assert!(view.prev_page().is_none());
        assert_eq!(view.go_to_page(10).unwrap().page, 10);
        assert!(view.next_page().is_none());
    }

    #[test]
    fn test_total_is_kept_while_loading() {
        let mut view = loaded(95);
        let request = view.next_page().unwrap();
        assert_eq!(request.page, 2);
        assert_eq!(view.status(), ViewStatus::Loading);
        assert_eq!(view.total_pages(), 10);
        assert_eq!(view.page_label(), "Page 2 of 10");
        assert_eq!(view.page_buttons(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_failure_replaces_view() {
        let mut view = loaded(95);
        let request = view.next_page().unwrap();
        assert!(view.apply(PageResponse {
            seq: request.seq,
            result: Err(FetchError::new("Wallet not found")),
        }));
        assert_eq!(view.status(), ViewStatus::Failed("Wallet not found"));
        assert!(view.visible_transactions().is_empty());
        assert!(view.wallet().is_none());

        let retry = view.reload().unwrap();
        assert_eq!(retry.page, 2);
        assert!(retry.seq > request.seq);
    }

    #[test]
    fn test_empty_wallet_allows_only_page_one() {
        let mut view = TransactionPageView::new(10).unwrap();
        let request = view.open(ADDR_A).unwrap();
        assert!(view.apply(ok(&request, window(1, 10, 0, Vec::new()))));

        assert_eq!(view.status(), ViewStatus::Empty);
        assert_eq!(view.total_pages(), 0);
        assert_eq!(view.page_label(), "Page 1 of 1");
        assert!(!view.can_next());
        assert!(view.go_to_page(1).is_ok());
        assert!(view.go_to_page(2).is_err());
    }

    #[test]
    fn test_navigation_without_address() {
        let mut view = TransactionPageView::default();
        assert_eq!(view.go_to_page(1), Err(ValidationError::NoAddress));
        assert!(view.next_page().is_none());
        assert!(view.reload().is_none());
    }

    #[test]
    fn test_shrunk_total_moves_to_last_page() {
        let mut view = loaded(100);
        let request = view.go_to_page(10).unwrap();
        assert!(view.apply(ok(&request, window(10, 10, 50, Vec::new()))));

        assert_eq!(view.page(), 5);
        assert_eq!(view.total_pages(), 5);
        assert_eq!(view.page_label(), "Page 5 of 5");
        assert_eq!(view.status(), ViewStatus::Loading);

        let follow_up = view.take_follow_up().unwrap();
        assert_eq!(follow_up.page, 5);
        assert!(follow_up.seq > request.seq);
        assert!(view.take_follow_up().is_none());

        assert!(view.apply(ok(&follow_up, window(5, 10, 50, vec![tx("0x50")]))));
        assert_eq!(view.visible_transactions()[0].hash, "0x50");
        assert!(view.take_follow_up().is_none());

        let again = view.reload().unwrap();
        assert!(again.page <= view.total_pages());
    }

    #[test]
    fn test_newer_request_supersedes_follow_up() {
        let mut view = loaded(100);
        let request = view.go_to_page(10).unwrap();
        assert!(view.apply(ok(&request, window(10, 10, 30, Vec::new()))));
        assert_eq!(view.page(), 3);

        let next = view.go_to_page(1).unwrap();
        assert!(view.take_follow_up().is_none());
        assert!(view.apply(ok(&next, window(1, 10, 30, vec![tx("0x01")]))));
        assert_eq!(view.page_label(), "Page 1 of 3");
    }

    #[test]
    fn test_page_size_is_validated() {
        assert!(TransactionPageView::new(0).is_err());
        assert!(TransactionPageView::new(101).is_err());
        assert_eq!(TransactionPageView::new(100).unwrap().page_size(), 100);
    }
}
