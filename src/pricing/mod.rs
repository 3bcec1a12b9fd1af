//! Pricing engine for booking requests.
//!
//! One rule table per [`PricingVariant`]; the calculator is a pure function
//! over the booking attributes.

pub mod calculators;
pub mod models;
pub mod rules;

// Re-export commonly used items
pub use calculators::{calculate_quote, format_money, round_money, PriceOverflow, TAX_RATE};
pub use models::{PriceQuote, PricingInput, PricingVariant, UnknownVariant};
