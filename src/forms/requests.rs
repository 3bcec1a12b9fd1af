//! Request DTOs for the form endpoints.

use serde::Deserialize;

/// Contact form body
#[derive(Debug, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A numeric form value as submitted: JSON number or numeric text.
///
/// HTML forms post numbers as strings, so both are accepted here and
/// parsed during validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(serde_json::Number),
    Text(String),
}

/// Booking form body.
///
/// Every field is optional at this layer; which ones are required depends on
/// the configured variant.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(default, alias = "fullName")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "serviceType")]
    pub service: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub home_type: Option<String>,
    #[serde(default)]
    pub cleaning_type: Option<String>,
    #[serde(default)]
    pub square_feet: Option<RawNumber>,
    #[serde(default)]
    pub bedrooms: Option<RawNumber>,
    #[serde(default)]
    pub bathrooms: Option<RawNumber>,
    #[serde(default)]
    pub half_bathrooms: Option<RawNumber>,
    #[serde(default)]
    pub floor_type: Option<String>,
    #[serde(default)]
    pub cleaning_levels: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub how_often: Option<String>,
    #[serde(default)]
    pub dust: Option<String>,
    /// Comma-separated list
    #[serde(default)]
    pub additional_services: Option<String>,
    #[serde(default)]
    pub hear_about: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}
