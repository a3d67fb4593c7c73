//! Decimal formatting for ETH amounts, USD prices and percentage changes.

use rust_decimal::prelude::*;

/// Fixed number of decimal places, rounding half away from zero.
pub fn fixed(value: &Decimal, places: u32) -> String {
    let rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.prec$}", rounded, prec = places as usize)
}

/// ETH amounts in the transaction table: always six decimal places.
pub fn eth(value: &Decimal) -> String {
    fixed(value, 6)
}

/// USD price with two decimals and thousands separators, e.g. `$3,021.45`.
pub fn usd(value: &Decimal) -> String {
    let body = super::num::group_thousands(&fixed(&value.abs(), 2));
    if value.is_sign_negative() && !value.is_zero() {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// Magnitude of a percentage change, e.g. `-1.234` → `1.23%`.
///
/// The sign is conveyed separately by the trend indicator.
pub fn percent_abs(change: &Decimal) -> String {
    format!("{}%", fixed(&change.abs(), 2))
}
