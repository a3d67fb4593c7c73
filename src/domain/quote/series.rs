//! Synthetic price series for the trend chart.
//!
//! The series is decoration, not history: it is randomised around the spot
//! price, tilted toward the sign of the 24h change, and always ends exactly
//! on the spot price.

use super::{PricePoint, PriceQuote};
use crate::error::ValidationError;
use rand::Rng;
use rust_decimal::Decimal;

/// One point per hour of the day.
pub const DEFAULT_POINT_COUNT: usize = 24;

/// Half-width of the band around spot, as a fraction of spot (2%).
const VOLATILITY: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// Resolution of the uniform noise term.
const NOISE_STEPS: i64 = 1_000_000;

/// Generate `point_count` points with the thread RNG.
pub fn generate_series(
    quote: &PriceQuote,
    point_count: usize,
) -> Result<Vec<PricePoint>, ValidationError> {
    generate_series_with_rng(quote, point_count, &mut rand::thread_rng())
}

/// Generate `point_count` points with a caller-supplied RNG.
///
/// Every value lies within `spot * 0.02` of spot; the last value is spot.
pub fn generate_series_with_rng<R: Rng + ?Sized>(
    quote: &PriceQuote,
    point_count: usize,
    rng: &mut R,
) -> Result<Vec<PricePoint>, ValidationError> {
    let spot = quote.spot_price;
    if spot <= Decimal::ZERO {
        return Err(ValidationError::InvalidPrice);
    }
    if point_count == 0 {
        return Err(ValidationError::InvalidPointCount);
    }
    let count = u32::try_from(point_count).map_err(|_| ValidationError::InvalidPointCount)?;

    let volatility = spot * VOLATILITY;
    let half = volatility / Decimal::TWO;
    let trend = if quote.is_positive() {
        Decimal::ONE
    } else {
        Decimal::NEGATIVE_ONE
    };
    let step = trend * volatility / Decimal::from(count);
    let low = spot - volatility;
    let high = spot + volatility;

    let points = (0..count)
        .map(|i| {
            let synthetic_price = if i + 1 == count {
                spot
            } else {
                let noise = Decimal::new(rng.gen_range(0..=NOISE_STEPS), 6) - Decimal::new(5, 1);
                let raw = spot + noise * volatility - half + Decimal::from(i) * step;
                raw.clamp(low, high)
            };
            PricePoint {
                sequence_index: i,
                synthetic_price,
            }
        })
        .collect();
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::str::FromStr;

    fn quote(spot: &str, change: &str) -> PriceQuote {
        PriceQuote {
            spot_price: Decimal::from_str(spot).unwrap(),
            change_24h_percent: Decimal::from_str(change).unwrap(),
        }
    }

    #[test]
    fn test_length_and_anchor() {
        let q = quote("3021.45", "2.1");
        let points = generate_series(&q, DEFAULT_POINT_COUNT).unwrap();
        assert_eq!(points.len(), 24);
        assert_eq!(points[23].synthetic_price, q.spot_price);
        let indexes: Vec<u32> = points.iter().map(|p| p.sequence_index).collect();
        assert_eq!(indexes, (0..24).collect::<Vec<_>>());
    }

    #[test]
    fn test_values_stay_in_band_both_trends() {
        let mut rng = StdRng::seed_from_u64(7);
        for change in ["3.5", "-3.5", "0"] {
            let q = quote("1800", change);
            let band = q.spot_price * Decimal::from_str("0.02").unwrap();
            for _ in 0..50 {
                let points = generate_series_with_rng(&q, 24, &mut rng).unwrap();
                for p in &points {
                    assert!(
                        (p.synthetic_price - q.spot_price).abs() <= band,
                        "{} out of band for change {}",
                        p.synthetic_price,
                        change
                    );
                }
            }
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let q = quote("2500", "-1");
        let a = generate_series_with_rng(&q, 12, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_series_with_rng(&q, 12, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_point_is_spot() {
        let q = quote("99.5", "1");
        let points = generate_series(&q, 1).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].synthetic_price, q.spot_price);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            generate_series(&quote("0", "1"), 24),
            Err(ValidationError::InvalidPrice)
        );
        assert_eq!(
            generate_series(&quote("-5", "1"), 24),
            Err(ValidationError::InvalidPrice)
        );
        assert_eq!(
            generate_series(&quote("3000", "1"), 0),
            Err(ValidationError::InvalidPointCount)
        );
    }
}
