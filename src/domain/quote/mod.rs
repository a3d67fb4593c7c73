//! Quote domain — ETH spot quote and the synthetic chart series built from it.

#[cfg(feature = "http")]
pub mod client;
mod convert;
#[cfg(all(feature = "poller", not(target_arch = "wasm32")))]
pub mod poller;
pub mod series;
pub mod state;
pub mod wire;

use crate::shared::fmt::decimal;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use series::{generate_series, generate_series_with_rng, DEFAULT_POINT_COUNT};
pub use state::QuoteState;

/// Current spot price (USD) and signed 24h change in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub spot_price: Decimal,
    pub change_24h_percent: Decimal,
}

impl PriceQuote {
    /// Upward trend; picks the chart colour and arrow.
    pub fn is_positive(&self) -> bool {
        self.change_24h_percent > Decimal::ZERO
    }

    /// `$3,021.45`
    pub fn display_price(&self) -> String {
        decimal::usd(&self.spot_price)
    }

    /// Unsigned change, e.g. `2.10%`; pair it with [`is_positive`](Self::is_positive).
    pub fn display_change(&self) -> String {
        decimal::percent_abs(&self.change_24h_percent)
    }
}

/// One point of the synthetic chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub sequence_index: u32,
    pub synthetic_price: Decimal,
}

impl PricePoint {
    /// X-axis label, one point per hour of the day.
    pub fn label(&self) -> String {
        format!("{}:00", self.sequence_index)
    }

    /// Tooltip value.
    pub fn display_price(&self) -> String {
        decimal::usd(&self.synthetic_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_is_positive() {
        let mut quote = PriceQuote {
            spot_price: Decimal::from(3000),
            change_24h_percent: Decimal::from_str("1.25").unwrap(),
        };
        assert!(quote.is_positive());
        quote.change_24h_percent = Decimal::ZERO;
        assert!(!quote.is_positive());
        quote.change_24h_percent = Decimal::from_str("-0.4").unwrap();
        assert!(!quote.is_positive());
    }

    #[test]
    fn test_point_label() {
        let point = PricePoint {
            sequence_index: 13,
            synthetic_price: Decimal::ONE,
        };
        assert_eq!(point.label(), "13:00");
        assert_eq!(point.display_price(), "$1.00");
    }

    #[test]
    fn test_display_helpers() {
        let quote = PriceQuote {
            spot_price: Decimal::from_str("3021.454").unwrap(),
            change_24h_percent: Decimal::from_str("-2.105").unwrap(),
        };
        assert_eq!(quote.display_price(), "$3,021.45");
        assert_eq!(quote.display_change(), "2.11%");
    }
}
