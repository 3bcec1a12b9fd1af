//! Response DTOs for the form endpoints.

use serde::Serialize;

pub const CONTACT_ACCEPTED: &str = "Message sent successfully!";
pub const BOOKING_ACCEPTED: &str = "Booking submitted successfully!";

/// Successful submission
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub message: String,
}

impl SubmissionResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
