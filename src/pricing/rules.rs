//! Rule tables for each pricing variant.
//!
//! A table names the booking attribute that selects a rate, the rates keyed
//! by that attribute's value, and the adjustments applied after the base
//! price (deep-cleaning surcharge, flat-priced extras).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::{PricingInput, PricingVariant};

/// Booking attribute whose value picks the rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    CleaningType,
    HomeType,
    ServiceType,
}

impl Selector {
    pub fn value<'a>(&self, input: &PricingInput<'a>) -> Option<&'a str> {
        match self {
            Selector::CleaningType => input.cleaning_type,
            Selector::HomeType => input.home_type,
            Selector::ServiceType => input.service_type,
        }
    }
}

/// Per-unit charges making up a base price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rate {
    pub per_square_foot: Decimal,
    pub per_bedroom: Decimal,
    pub per_bathroom: Decimal,
}

impl Rate {
    pub const ZERO: Rate = Rate::new(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);

    pub const fn new(per_square_foot: Decimal, per_bedroom: Decimal, per_bathroom: Decimal) -> Self {
        Self {
            per_square_foot,
            per_bedroom,
            per_bathroom,
        }
    }

    /// Base price for the input; `None` on overflow
    pub fn apply(&self, input: &PricingInput<'_>) -> Option<Decimal> {
        let area = input.square_feet.checked_mul(self.per_square_foot)?;
        let bedrooms = input.bedrooms.checked_mul(self.per_bedroom)?;
        let bathrooms = input.bathrooms.checked_mul(self.per_bathroom)?;
        area.checked_add(bedrooms)?.checked_add(bathrooms)
    }
}

/// Rate used when the selector value is one of `keys`
#[derive(Debug)]
pub struct RateRule {
    pub keys: &'static [&'static str],
    pub rate: Rate,
}

#[derive(Debug)]
pub struct RuleTable {
    pub selector: Selector,
    pub rules: &'static [RateRule],
    /// Rate when no rule matches
    pub fallback: Rate,
    /// Multiplier applied when the cleaning type is [`DEEP_CLEANING`]
    pub deep_clean_multiplier: Option<Decimal>,
    /// Additional services charged a flat [`RuleTable::extra_charge`] each
    pub extras: &'static [&'static str],
    pub extra_charge: Decimal,
}

pub const DEEP_CLEANING: &str = "Deep Cleaning";

static PER_SQUARE_FOOT: RuleTable = RuleTable {
    selector: Selector::CleaningType,
    rules: &[
        RateRule {
            keys: &["Post Renovation", "Standard cleaning"],
            rate: Rate::new(dec!(0.17), dec!(20), dec!(17.5)),
        },
        RateRule {
            keys: &[DEEP_CLEANING],
            rate: Rate::new(dec!(0.20), dec!(20), dec!(17.5)),
        },
    ],
    // Room charges apply even when the cleaning type has no area rate
    fallback: Rate::new(Decimal::ZERO, dec!(20), dec!(17.5)),
    deep_clean_multiplier: None,
    extras: &[],
    extra_charge: Decimal::ZERO,
};

static HOME_TYPE: RuleTable = RuleTable {
    selector: Selector::HomeType,
    rules: &[
        RateRule {
            keys: &["House", "Apartment", "Townhouse"],
            rate: Rate::new(Decimal::ZERO, dec!(100), dec!(20)),
        },
        RateRule {
            keys: &["Office", "Condo"],
            rate: Rate::new(dec!(0.40), Decimal::ZERO, Decimal::ZERO),
        },
    ],
    fallback: Rate::ZERO,
    deep_clean_multiplier: Some(dec!(1.15)),
    extras: &[],
    extra_charge: Decimal::ZERO,
};

static SERVICE_TYPE: RuleTable = RuleTable {
    selector: Selector::ServiceType,
    rules: &[
        RateRule {
            keys: &[
                "Residential",
                "Residential Cleaning",
                "Move-In/Out",
                "Move-In/Out Cleaning",
            ],
            rate: Rate::new(Decimal::ZERO, dec!(90), dec!(10)),
        },
        RateRule {
            keys: &[
                "Commercial",
                "Commercial Cleaning",
                "Post-Construction",
                "Post-Construction Cleaning",
            ],
            rate: Rate::new(dec!(0.30), Decimal::ZERO, Decimal::ZERO),
        },
    ],
    fallback: Rate::ZERO,
    deep_clean_multiplier: Some(dec!(1.15)),
    extras: &["Oven inside", "Refrigerator inside"],
    extra_charge: dec!(20),
};

impl PricingVariant {
    pub fn rules(&self) -> &'static RuleTable {
        match self {
            PricingVariant::PerSquareFoot => &PER_SQUARE_FOOT,
            PricingVariant::HomeType => &HOME_TYPE,
            PricingVariant::ServiceType => &SERVICE_TYPE,
        }
    }
}

impl RuleTable {
    /// Find the rule for the input's selector value, if any
    pub fn lookup(&self, input: &PricingInput<'_>) -> Option<&RateRule> {
        let value = self.selector.value(input)?;
        self.rules.iter().find(|rule| rule.keys.contains(&value))
    }

    /// Number of this table's extras present in the requested services
    pub fn matched_extras(&self, requested: &[String]) -> usize {
        self.extras
            .iter()
            .filter(|extra| requested.iter().any(|s| s == *extra))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_variant_selects_on_its_attribute() {
        assert_eq!(PricingVariant::PerSquareFoot.rules().selector, Selector::CleaningType);
        assert_eq!(PricingVariant::HomeType.rules().selector, Selector::HomeType);
        assert_eq!(PricingVariant::ServiceType.rules().selector, Selector::ServiceType);
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let table = PricingVariant::HomeType.rules();
        let input = PricingInput {
            home_type: Some("house"),
            ..Default::default()
        };
        assert!(table.lookup(&input).is_none());

        let input = PricingInput {
            home_type: Some("House"),
            ..Default::default()
        };
        assert_eq!(table.lookup(&input).map(|r| r.rate.per_bedroom), Some(dec!(100)));
    }

    #[test]
    fn test_matched_extras_counts_each_extra_once() {
        let table = PricingVariant::ServiceType.rules();
        let requested = vec![
            "Oven inside".to_string(),
            "Oven inside".to_string(),
            "Windows".to_string(),
            "Refrigerator inside".to_string(),
        ];
        assert_eq!(table.matched_extras(&requested), 2);
        assert_eq!(PricingVariant::HomeType.rules().matched_extras(&requested), 0);
    }

    #[test]
    fn test_rate_apply() {
        let rate = Rate::new(dec!(0.5), dec!(10), dec!(5));
        let input = PricingInput {
            square_feet: dec!(100),
            bedrooms: dec!(2),
            bathrooms: dec!(3),
            ..Default::default()
        };
        assert_eq!(rate.apply(&input), Some(dec!(85)));
        assert_eq!(Rate::ZERO.apply(&input), Some(dec!(0)));
    }

    #[test]
    fn test_rate_apply_overflow() {
        let rate = Rate::new(dec!(0.5), dec!(100), dec!(5));
        let input = PricingInput {
            bedrooms: Decimal::MAX,
            ..Default::default()
        };
        assert_eq!(rate.apply(&input), None);
    }
}
