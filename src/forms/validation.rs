//! Required-field and date checks for submitted forms.
//!
//! Validation is pure: the caller supplies "today" so the date rule can be
//! tested without a clock.

use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use super::requests::{BookingRequest, ContactRequest, RawNumber};
use crate::pricing::{PricingInput, PricingVariant};

/// Validation failures. `Display` is the message returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required. Missing: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for {0}.")]
    InvalidField(&'static str),

    #[error("Invalid date format.")]
    InvalidDate,

    #[error("You cannot select a past date.")]
    PastDate,
}

/// Largest accepted value for any quantity field (square feet, rooms)
pub const MAX_QUANTITY: Decimal = dec!(10000000);

/// Booking fields that a variant can require
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Service,
    Date,
    HomeType,
    CleaningType,
    SquareFeet,
    Bedrooms,
    Bathrooms,
    FloorType,
    CleaningLevels,
    Frequency,
    City,
    Province,
    PostalCode,
}

impl Field {
    /// JSON key as the variant's form submits it
    pub fn wire_name(self, variant: PricingVariant) -> &'static str {
        match (self, variant) {
            (Field::Name, PricingVariant::ServiceType) => "fullName",
            (Field::Name, _) => "name",
            (Field::Service, PricingVariant::ServiceType) => "serviceType",
            (Field::Service, _) => "service",
            (Field::Email, _) => "email",
            (Field::Date, _) => "date",
            (Field::HomeType, _) => "homeType",
            (Field::CleaningType, _) => "cleaningType",
            (Field::SquareFeet, _) => "squareFeet",
            (Field::Bedrooms, _) => "bedrooms",
            (Field::Bathrooms, _) => "bathrooms",
            (Field::FloorType, _) => "floorType",
            (Field::CleaningLevels, _) => "cleaningLevels",
            (Field::Frequency, _) => "frequency",
            (Field::City, _) => "city",
            (Field::Province, _) => "province",
            (Field::PostalCode, _) => "postalCode",
        }
    }
}

/// Required fields per variant, in the order they are checked
pub fn required_fields(variant: PricingVariant) -> &'static [Field] {
    use Field::*;

    match variant {
        PricingVariant::PerSquareFoot => &[
            Name,
            Email,
            Service,
            Date,
            HomeType,
            CleaningType,
            SquareFeet,
            Bedrooms,
            FloorType,
            CleaningLevels,
            City,
            Province,
            PostalCode,
        ],
        PricingVariant::HomeType => &[
            Name,
            Email,
            Service,
            Date,
            HomeType,
            CleaningType,
            Bedrooms,
            Bathrooms,
            Frequency,
            City,
            Province,
            PostalCode,
        ],
        PricingVariant::ServiceType => &[
            Name,
            Email,
            Service,
            Date,
            HomeType,
            CleaningType,
            City,
            Province,
            PostalCode,
        ],
    }
}

/// A contact submission that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A booking submission that passed validation.
///
/// Optional fields stay optional; the variant's required ones are
/// guaranteed present.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub name: Option<String>,
    pub email: Option<String>,
    pub service: Option<String>,
    pub date: NaiveDate,
    /// Date as submitted
    pub date_text: String,
    pub home_type: Option<String>,
    pub cleaning_type: Option<String>,
    pub square_feet: Option<Decimal>,
    pub bedrooms: Option<Decimal>,
    pub bathrooms: Option<Decimal>,
    pub half_bathrooms: Option<Decimal>,
    pub floor_type: Option<String>,
    pub cleaning_levels: Option<String>,
    pub frequency: Option<String>,
    pub how_often: Option<String>,
    pub dust: Option<String>,
    pub additional_services: Vec<String>,
    pub hear_about: Option<String>,
    pub comments: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
}

impl Booking {
    pub fn pricing_input(&self) -> PricingInput<'_> {
        PricingInput {
            service_type: self.service.as_deref(),
            home_type: self.home_type.as_deref(),
            cleaning_type: self.cleaning_type.as_deref(),
            square_feet: self.square_feet.unwrap_or(Decimal::ZERO),
            bedrooms: self.bedrooms.unwrap_or(Decimal::ZERO),
            bathrooms: self.bathrooms.unwrap_or(Decimal::ZERO),
            additional_services: &self.additional_services,
        }
    }
}

pub fn validate_contact(request: ContactRequest) -> Result<Contact, ValidationError> {
    Ok(Contact {
        name: text(request.name).ok_or(ValidationError::MissingField("name"))?,
        email: text(request.email).ok_or(ValidationError::MissingField("email"))?,
        message: text(request.message).ok_or(ValidationError::MissingField("message"))?,
    })
}

/// Validate a booking for `variant`, rejecting dates before `today`.
pub fn validate_booking(
    request: BookingRequest,
    variant: PricingVariant,
    today: NaiveDate,
) -> Result<Booking, ValidationError> {
    if let Some(field) = required_fields(variant)
        .iter()
        .find(|field| !is_present(&request, **field))
    {
        return Err(ValidationError::MissingField(field.wire_name(variant)));
    }

    let date_text = text(request.date).ok_or(ValidationError::MissingField("date"))?;
    let date = parse_date(&date_text)?;
    if date < today {
        return Err(ValidationError::PastDate);
    }

    let booking = Booking {
        name: text(request.name),
        email: text(request.email),
        service: text(request.service),
        date,
        date_text,
        home_type: text(request.home_type),
        cleaning_type: text(request.cleaning_type),
        square_feet: quantity(request.square_feet, "squareFeet")?,
        bedrooms: quantity(request.bedrooms, "bedrooms")?,
        bathrooms: quantity(request.bathrooms, "bathrooms")?,
        half_bathrooms: quantity(request.half_bathrooms, "halfBathrooms")?,
        floor_type: text(request.floor_type),
        cleaning_levels: text(request.cleaning_levels),
        frequency: text(request.frequency),
        how_often: text(request.how_often),
        dust: text(request.dust),
        additional_services: split_services(request.additional_services.as_deref()),
        hear_about: text(request.hear_about),
        comments: text(request.comments),
        city: text(request.city),
        province: text(request.province),
        postal_code: text(request.postal_code),
    };

    // Required quantities may be zero
    for field in required_fields(variant) {
        let value = match field {
            Field::SquareFeet => booking.square_feet,
            Field::Bedrooms => booking.bedrooms,
            Field::Bathrooms => booking.bathrooms,
            _ => continue,
        };
        if value.is_some_and(|v| v.is_zero()) {
            debug!("Accepting zero for required field {}", field.wire_name(variant));
        }
    }

    Ok(booking)
}

/// Parse a `YYYY-MM-DD` date, or an RFC 3339 timestamp taken in local time.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Local).date_naive())
        .map_err(|_| ValidationError::InvalidDate)
}

fn is_present(request: &BookingRequest, field: Field) -> bool {
    match field {
        Field::Name => has_text(&request.name),
        Field::Email => has_text(&request.email),
        Field::Service => has_text(&request.service),
        Field::Date => has_text(&request.date),
        Field::HomeType => has_text(&request.home_type),
        Field::CleaningType => has_text(&request.cleaning_type),
        Field::SquareFeet => has_number(&request.square_feet),
        Field::Bedrooms => has_number(&request.bedrooms),
        Field::Bathrooms => has_number(&request.bathrooms),
        Field::FloorType => has_text(&request.floor_type),
        Field::CleaningLevels => has_text(&request.cleaning_levels),
        Field::Frequency => has_text(&request.frequency),
        Field::City => has_text(&request.city),
        Field::Province => has_text(&request.province),
        Field::PostalCode => has_text(&request.postal_code),
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// A supplied number counts as present even when it is zero
fn has_number(value: &Option<RawNumber>) -> bool {
    match value {
        Some(RawNumber::Number(_)) => true,
        Some(RawNumber::Text(t)) => !t.trim().is_empty(),
        None => false,
    }
}

/// Trimmed text, `None` when blank
fn text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a quantity in `0..=MAX_QUANTITY`; blank counts as absent
fn quantity(value: Option<RawNumber>, field: &'static str) -> Result<Option<Decimal>, ValidationError> {
    let parsed = match value {
        None => return Ok(None),
        Some(RawNumber::Text(t)) if t.trim().is_empty() => return Ok(None),
        Some(RawNumber::Text(t)) => parse_decimal(t.trim()),
        Some(RawNumber::Number(n)) => parse_decimal(&n.to_string()),
    };

    match parsed {
        Some(value) if !value.is_sign_negative() && value <= MAX_QUANTITY => {
            Ok(Some(value.normalize()))
        }
        _ => Err(ValidationError::InvalidField(field)),
    }
}

fn parse_decimal(value: &str) -> Option<Decimal> {
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

fn split_services(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
