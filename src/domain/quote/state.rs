//! Price widget state — app-owned, SDK-provided update logic.

use super::{generate_series, PricePoint, PriceQuote};
use crate::error::{FetchError, SdkError};

/// Shown in place of the chart when the quote cannot be fetched.
pub const QUOTE_FAILED_MESSAGE: &str = "Failed to load price";

/// What the price widget renders.
///
/// A failed refresh replaces whatever was shown; there is no stale chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QuoteState {
    /// Before the first response.
    #[default]
    Loading,
    Loaded {
        quote: PriceQuote,
        series: Vec<PricePoint>,
    },
    Failed(FetchError),
}

impl QuoteState {
    /// Build the next state from a quote fetch outcome.
    pub fn from_fetch(result: Result<PriceQuote, SdkError>, point_count: usize) -> Self {
        let built = result.and_then(|quote| {
            let series = generate_series(&quote, point_count)?;
            Ok(QuoteState::Loaded { quote, series })
        });
        match built {
            Ok(state) => state,
            Err(err) => {
                tracing::debug!(error = %err, "Quote unavailable");
                QuoteState::Failed(FetchError::new(QUOTE_FAILED_MESSAGE))
            }
        }
    }

    pub fn quote(&self) -> Option<&PriceQuote> {
        match self {
            QuoteState::Loaded { quote, .. } => Some(quote),
            _ => None,
        }
    }

    pub fn series(&self) -> &[PricePoint] {
        match self {
            QuoteState::Loaded { series, .. } => series,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QuoteState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QuoteState::Failed(err) => Some(&err.message),
            _ => None,
        }
    }
}
