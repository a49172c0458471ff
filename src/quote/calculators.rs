//! Core pricing calculation functions.
//!
//! Pure functions for quote math - no I/O, no hidden state. The same
//! inputs always produce the same quoted range.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::config::QuoteConfig;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use clearview_web::quote::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven);
    // Zero-valued Decimal products collapse to scale 0; pad back so money
    // always carries exactly `places` decimal digits.
    rounded.rescale(places);
    rounded
}

/// Itemized price breakdown for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteBreakdown {
    pub base_price: Decimal,
    pub material_surcharge: Decimal,
    pub travel_surcharge: Decimal,
    /// base * multiplier + travel surcharge, rounded to cents
    pub total: Decimal,
    /// Low end of the estimate, whole currency units
    pub min_price: Decimal,
    /// High end of the estimate: total * margin factor, rounded up
    pub max_price: Decimal,
}

/// Compute the price breakdown for a serviceable job.
///
/// Story counts at or above 3 map to the "3+" tier and unrecognized
/// materials are priced at the baseline multiplier; both are deliberate
/// defaults, not validation failures.
///
/// Rounding order is fixed: each line item to cents, then the summed
/// total to cents, then min/max to whole currency units. The max rounds
/// up since it is the top of the negotiation buffer.
pub fn compute_quote(
    story_count: u32,
    material: &str,
    travel_surcharge: Decimal,
    config: &QuoteConfig,
) -> QuoteBreakdown {
    let base_price = config.base_rate_for(story_count);
    let multiplier = config.multiplier_for(material);

    let material_surcharge = round_money(base_price * (multiplier - Decimal::ONE), 2);
    let subtotal = base_price * multiplier;
    let total = round_money(subtotal + travel_surcharge, 2);

    let min_price = round_money(total, 0);
    let max_price = (total * config.margin_factor).ceil();

    QuoteBreakdown {
        base_price,
        material_surcharge,
        travel_surcharge,
        total,
        min_price,
        max_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn config() -> QuoteConfig {
        QuoteConfig::default()
    }

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_bankers_rounding_to_even() {
        // Banker's rounding: 0.5 rounds to nearest even
        assert_eq!(round_money(dec!(2.5), 0), dec!(2)); // rounds down to even
        assert_eq!(round_money(dec!(3.5), 0), dec!(4)); // rounds up to even
        assert_eq!(round_money(dec!(4.5), 0), dec!(4)); // rounds down to even
    }

    #[test]
    fn test_round_money_normal_rounding() {
        // Non-halfway values round normally
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
        assert_eq!(round_money(dec!(714.25), 0), dec!(714));
    }

    #[test]
    fn test_round_money_zero() {
        assert_eq!(round_money(dec!(0), 2), dec!(0));
    }

    // ==================== compute_quote tests ====================

    #[test]
    fn local_vinyl_two_story() {
        // 15 km stays under the surcharge threshold
        let quote = compute_quote(2, "vinyl", Decimal::ZERO, &config());

        assert_eq!(quote.base_price, dec!(500));
        assert_eq!(quote.material_surcharge, dec!(0.00));
        assert_eq!(quote.travel_surcharge, Decimal::ZERO);
        assert_eq!(quote.min_price, dec!(500));
        assert_eq!(quote.max_price, dec!(575));
    }

    #[test]
    fn distant_brick_two_story() {
        // 28.4 km -> 21.00 travel surcharge upstream
        let quote = compute_quote(2, "brick", dec!(21.00), &config());

        assert_eq!(quote.base_price, dec!(500));
        assert_eq!(quote.material_surcharge, dec!(50.00));
        assert_eq!(quote.total, dec!(571.00));
        assert_eq!(quote.min_price, dec!(571));
        assert_eq!(quote.max_price, dec!(657));
    }

    #[test]
    fn high_risk_stucco_two_story() {
        // 35.7 km -> 39.25 travel surcharge upstream
        let quote = compute_quote(2, "stucco", dec!(39.25), &config());

        assert_eq!(quote.material_surcharge, dec!(175.00));
        assert_eq!(quote.total, dec!(714.25));
        assert_eq!(quote.min_price, dec!(714));
        // 714.25 * 1.15 = 821.3875, quoted ceiling is 822
        assert_eq!(quote.max_price, dec!(822));
    }

    #[test]
    fn unknown_material_prices_at_baseline() {
        let quote = compute_quote(2, "unknown-xyz", Decimal::ZERO, &config());

        assert_eq!(quote.material_surcharge, dec!(0.00));
        assert_eq!(quote.min_price, dec!(500));
    }

    #[test]
    fn story_count_above_three_uses_top_tier() {
        let three = compute_quote(3, "vinyl", Decimal::ZERO, &config());
        let five = compute_quote(5, "vinyl", Decimal::ZERO, &config());

        assert_eq!(three.base_price, dec!(700));
        assert_eq!(five, three);
    }

    #[test]
    fn material_surcharge_is_zero_exactly_when_multiplier_is_one() {
        let cfg = config();
        for (material, multiplier) in &cfg.material_multipliers {
            let quote = compute_quote(1, material, Decimal::ZERO, &cfg);
            if *multiplier == Decimal::ONE {
                assert_eq!(quote.material_surcharge, dec!(0.00));
            } else {
                assert!(quote.material_surcharge > Decimal::ZERO);
                assert_eq!(
                    quote.material_surcharge,
                    round_money(quote.base_price * (*multiplier - Decimal::ONE), 2)
                );
            }
        }
    }

    #[test]
    fn max_price_never_below_min_price() {
        let cfg = config();
        for stories in 1..=4 {
            for material in ["vinyl", "brick", "stucco", "wood", "mystery"] {
                for surcharge in [dec!(0), dec!(12.37), dec!(62.50)] {
                    let quote = compute_quote(stories, material, surcharge, &cfg);
                    assert!(quote.max_price >= quote.min_price);
                }
            }
        }
    }

    #[test]
    fn compute_quote_is_idempotent() {
        let first = compute_quote(2, "stucco", dec!(39.25), &config());
        let second = compute_quote(2, "stucco", dec!(39.25), &config());
        assert_eq!(first, second);
    }
}
