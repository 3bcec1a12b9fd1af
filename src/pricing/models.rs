//! Pricing types shared by the rule tables and the calculator.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::calculators::{format_money, round_money, PriceOverflow, TAX_MULTIPLIER};

/// Which booking form (field set + pricing formula) the server runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PricingVariant {
    /// Square-footage rate chosen by cleaning type, plus per-room charges.
    #[default]
    PerSquareFoot,
    /// Room-based or area-based rate chosen by home type.
    HomeType,
    /// Room-based or area-based rate chosen by service type, with extras.
    ServiceType,
}

impl PricingVariant {
    /// Tag used in configuration and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingVariant::PerSquareFoot => "per-square-foot",
            PricingVariant::HomeType => "home-type",
            PricingVariant::ServiceType => "service-type",
        }
    }
}

impl fmt::Display for PricingVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pricing variant '{0}' (expected per-square-foot, home-type or service-type)")]
pub struct UnknownVariant(pub String);

impl FromStr for PricingVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "per-square-foot" => Ok(PricingVariant::PerSquareFoot),
            "b" | "home-type" => Ok(PricingVariant::HomeType),
            "c" | "service-type" => Ok(PricingVariant::ServiceType),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Booking attributes the pricing rules look at.
///
/// Absent quantities are priced as zero.
#[derive(Debug, Clone, Default)]
pub struct PricingInput<'a> {
    pub service_type: Option<&'a str>,
    pub home_type: Option<&'a str>,
    pub cleaning_type: Option<&'a str>,
    pub square_feet: Decimal,
    pub bedrooms: Decimal,
    pub bathrooms: Decimal,
    pub additional_services: &'a [String],
}

/// Price quote for one booking. Derived per request, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub total_price: Decimal,
    pub price_after_tax: Decimal,
    /// False when no rule matched the selector value and the fallback rate was used
    pub rule_matched: bool,
}

impl PriceQuote {
    /// Build a quote from an unrounded pre-tax total.
    ///
    /// Tax is applied to the unrounded total; both values are rounded afterwards.
    pub fn from_total(total: Decimal, rule_matched: bool) -> Result<Self, PriceOverflow> {
        let after_tax = total.checked_mul(TAX_MULTIPLIER).ok_or(PriceOverflow)?;

        Ok(Self {
            total_price: round_money(total, 2),
            price_after_tax: round_money(after_tax, 2),
            rule_matched,
        })
    }

    /// Pre-tax total with exactly two fraction digits
    pub fn total_display(&self) -> String {
        format_money(self.total_price)
    }

    /// Taxed total with exactly two fraction digits
    pub fn after_tax_display(&self) -> String {
        format_money(self.price_after_tax)
    }
}
