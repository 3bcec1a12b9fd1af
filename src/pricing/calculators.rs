//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::{PriceQuote, PricingInput, PricingVariant};
use super::rules::DEEP_CLEANING;

/// Flat sales tax applied to every quote (13%)
pub const TAX_RATE: Decimal = dec!(0.13);
pub const TAX_MULTIPLIER: Decimal = dec!(1.13);

/// A quote whose arithmetic exceeds the `Decimal` range
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("price calculation overflowed")]
pub struct PriceOverflow;

/// Round to specified decimal places, halves away from zero.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use booking_forms::pricing::round_money;
///
/// assert_eq!(round_money(dec!(290.975), 2), dec!(290.98));
/// assert_eq!(round_money(dec!(217.525), 2), dec!(217.53));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Render an amount with exactly two fraction digits ("257.50").
pub fn format_money(amount: Decimal) -> String {
    let mut value = round_money(amount, 2);
    value.rescale(2);
    value.to_string()
}

/// Calculate the price quote for a booking under the given variant.
///
/// The selector attribute picks a rate from the variant's rule table; the
/// deep-cleaning surcharge multiplies the base price, then flat-priced
/// extras are added. Unmatched selector values fall back to the table's
/// fallback rate and are reported through [`PriceQuote::rule_matched`].
pub fn calculate_quote(
    variant: PricingVariant,
    input: &PricingInput<'_>,
) -> Result<PriceQuote, PriceOverflow> {
    let table = variant.rules();
    let rule = table.lookup(input);
    let rate = rule.map(|r| r.rate).unwrap_or(table.fallback);

    let mut total = rate.apply(input).ok_or(PriceOverflow)?;

    if let Some(multiplier) = table.deep_clean_multiplier {
        if input.cleaning_type == Some(DEEP_CLEANING) {
            total = total.checked_mul(multiplier).ok_or(PriceOverflow)?;
        }
    }

    let extras = table.matched_extras(input.additional_services);
    total = table
        .extra_charge
        .checked_mul(Decimal::from(extras))
        .and_then(|charge| total.checked_add(charge))
        .ok_or(PriceOverflow)?;

    PriceQuote::from_total(total, rule.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_half_away_from_zero() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(3));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
        assert_eq!(round_money(dec!(2.25), 1), dec!(2.3));
        assert_eq!(round_money(dec!(-2.5), 0), dec!(-3));
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
        assert_eq!(round_money(dec!(123456.789), 2), dec!(123456.79));
    }

    #[test]
    fn test_format_money_pads_to_two_places() {
        assert_eq!(format_money(dec!(257.5)), "257.50");
        assert_eq!(format_money(dec!(340)), "340.00");
        assert_eq!(format_money(dec!(0)), "0.00");
        assert_eq!(format_money(dec!(217.525)), "217.53");
    }

    // ==================== calculate_quote tests ====================

    #[test]
    fn test_per_square_foot_deep_cleaning() {
        let input = PricingInput {
            cleaning_type: Some("Deep Cleaning"),
            square_feet: dec!(1000),
            bedrooms: dec!(2),
            bathrooms: dec!(1),
            ..Default::default()
        };

        let quote = calculate_quote(PricingVariant::PerSquareFoot, &input).unwrap();

        assert_eq!(quote.total_display(), "257.50");
        assert_eq!(quote.after_tax_display(), "290.98");
        assert!(quote.rule_matched);
    }

    #[test]
    fn test_per_square_foot_standard_rate() {
        let input = PricingInput {
            cleaning_type: Some("Standard cleaning"),
            square_feet: dec!(1000),
            ..Default::default()
        };

        let quote = calculate_quote(PricingVariant::PerSquareFoot, &input).unwrap();

        assert_eq!(quote.total_price, dec!(170));
        assert_eq!(quote.price_after_tax, dec!(192.10));
    }

    #[test]
    fn test_per_square_foot_unknown_cleaning_type_keeps_room_charges() {
        let input = PricingInput {
            cleaning_type: Some("Window Washing"),
            square_feet: dec!(1000),
            bedrooms: dec!(1),
            bathrooms: dec!(2),
            ..Default::default()
        };

        let quote = calculate_quote(PricingVariant::PerSquareFoot, &input).unwrap();

        assert_eq!(quote.total_price, dec!(55)); // 20 + 2 * 17.5
        assert!(!quote.rule_matched);
    }

    #[test]
    fn test_home_type_house() {
        let input = PricingInput {
            home_type: Some("House"),
            cleaning_type: Some("Standard"),
            bedrooms: dec!(3),
            bathrooms: dec!(2),
            ..Default::default()
        };

        let quote = calculate_quote(PricingVariant::HomeType, &input).unwrap();

        assert_eq!(quote.total_display(), "340.00");
        assert_eq!(quote.after_tax_display(), "384.20");
    }

    #[test]
    fn test_home_type_condo_deep_cleaning_surcharge() {
        let input = PricingInput {
            home_type: Some("Condo"),
            cleaning_type: Some("Deep Cleaning"),
            square_feet: dec!(1000),
            bedrooms: dec!(4),
            ..Default::default()
        };

        let quote = calculate_quote(PricingVariant::HomeType, &input).unwrap();

        // 1000 * 0.40 * 1.15, bedrooms not charged for area-priced homes
        assert_eq!(quote.total_price, dec!(460));
        assert_eq!(quote.price_after_tax, dec!(519.80));
    }

    #[test]
    fn test_home_type_unmatched_yields_zero() {
        let input = PricingInput {
            home_type: Some("Boat"),
            bedrooms: dec!(3),
            bathrooms: dec!(2),
            ..Default::default()
        };

        let quote = calculate_quote(PricingVariant::HomeType, &input).unwrap();

        assert_eq!(quote.total_display(), "0.00");
        assert_eq!(quote.after_tax_display(), "0.00");
        assert!(!quote.rule_matched);
    }

    #[test]
    fn test_service_type_commercial_with_extra() {
        let services = vec!["Oven inside".to_string()];
        let input = PricingInput {
            service_type: Some("Commercial Cleaning"),
            home_type: Some("Office"),
            cleaning_type: Some("Deep Cleaning"),
            square_feet: dec!(500),
            additional_services: &services,
            ..Default::default()
        };

        let quote = calculate_quote(PricingVariant::ServiceType, &input).unwrap();

        assert_eq!(quote.total_display(), "192.50");
        assert_eq!(quote.after_tax_display(), "217.53");
    }

    #[test]
    fn test_service_type_residential_with_both_extras() {
        let services = vec![
            "Refrigerator inside".to_string(),
            "Oven inside".to_string(),
            "Baseboards".to_string(),
        ];
        let input = PricingInput {
            service_type: Some("Residential"),
            bedrooms: dec!(2),
            bathrooms: dec!(1),
            additional_services: &services,
            ..Default::default()
        };

        let quote = calculate_quote(PricingVariant::ServiceType, &input).unwrap();

        assert_eq!(quote.total_price, dec!(230)); // 180 + 10 + 2 * 20
    }

    #[test]
    fn test_extras_are_charged_even_without_matching_rule() {
        let services = vec!["Oven inside".to_string()];
        let input = PricingInput {
            service_type: Some("Gardening"),
            additional_services: &services,
            ..Default::default()
        };

        let quote = calculate_quote(PricingVariant::ServiceType, &input).unwrap();

        assert_eq!(quote.total_price, dec!(20));
        assert!(!quote.rule_matched);
    }

    #[test]
    fn test_tax_is_applied_before_rounding() {
        let totals = [dec!(0.01), dec!(9.995), dec!(257.5), dec!(1234.567), dec!(99999.99)];
        for total in totals {
            let quote = PriceQuote::from_total(total, true).unwrap();
            assert_eq!(quote.price_after_tax, round_money(total * TAX_MULTIPLIER, 2));
            assert_eq!(quote.total_price, round_money(total, 2));
        }
        assert_eq!(TAX_MULTIPLIER, Decimal::ONE + TAX_RATE);
    }

    #[test]
    fn test_overflowing_quantities_are_an_error() {
        let input = PricingInput {
            home_type: Some("House"),
            bedrooms: Decimal::MAX,
            ..Default::default()
        };
        assert_eq!(calculate_quote(PricingVariant::HomeType, &input), Err(PriceOverflow));

        // Fits before tax, overflows once taxed
        let input = PricingInput {
            cleaning_type: Some("Window Washing"),
            bedrooms: dec!(3600000000000000000000000000), // * 20 = 7.2e28
            ..Default::default()
        };
        assert_eq!(calculate_quote(PricingVariant::PerSquareFoot, &input), Err(PriceOverflow));
    }
}
