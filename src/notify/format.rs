//! Notification bodies for accepted submissions.
//!
//! A notification is an ordered list of labelled rows, rendered once as
//! `Label: value` text and once as an HTML table.

use askama::Template;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::OutboundEmail;
use crate::forms::validation::{Booking, Contact};
use crate::pricing::PriceQuote;

pub const CONTACT_SUBJECT: &str = "New Contact Form Submission";
pub const BOOKING_SUBJECT: &str = "New Booking Request";

const NOT_SPECIFIED: &str = "Not specified";
const NONE: &str = "None";

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub label: &'static str,
    pub value: String,
}

impl Row {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

#[derive(Template)]
#[template(path = "email/notification.html")]
struct NotificationTemplate<'a> {
    subject: &'a str,
    rows: &'a [Row],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub subject: &'static str,
    pub rows: Vec<Row>,
}

impl Notification {
    pub fn contact(contact: &Contact, reference: Uuid) -> Self {
        Self {
            subject: CONTACT_SUBJECT,
            rows: vec![
                Row::new("Name", contact.name.as_str()),
                Row::new("Email", contact.email.as_str()),
                Row::new("Message", contact.message.as_str()),
                Row::new("Reference", reference.to_string()),
            ],
        }
    }

    pub fn booking(booking: &Booking, quote: &PriceQuote, reference: Uuid) -> Self {
        let services = if booking.additional_services.is_empty() {
            NONE.to_string()
        } else {
            booking.additional_services.join(", ")
        };

        Self {
            subject: BOOKING_SUBJECT,
            rows: vec![
                Row::new("Name", specified(&booking.name)),
                Row::new("Email", specified(&booking.email)),
                Row::new("Service", specified(&booking.service)),
                Row::new("Preferred Date", booking.date_text.as_str()),
                Row::new("Home Type", specified(&booking.home_type)),
                Row::new("Cleaning Type", specified(&booking.cleaning_type)),
                Row::new("Square Feet", quantity(booking.square_feet)),
                Row::new("Bedrooms", quantity(booking.bedrooms)),
                Row::new("Bathrooms", quantity(booking.bathrooms)),
                Row::new("Half Bathrooms", quantity(booking.half_bathrooms)),
                Row::new("Floor Type", specified(&booking.floor_type)),
                Row::new("Cleaning Levels", specified(&booking.cleaning_levels)),
                Row::new("Frequency", specified(&booking.frequency)),
                Row::new("How Often", specified(&booking.how_often)),
                Row::new("Dust Level", specified(&booking.dust)),
                Row::new("Additional Services", services),
                Row::new("How Did You Hear About Us", specified(&booking.hear_about)),
                Row::new(
                    "Comments & Questions",
                    booking.comments.as_deref().unwrap_or(NONE),
                ),
                Row::new("City", specified(&booking.city)),
                Row::new("Province", specified(&booking.province)),
                Row::new("Postal Code", specified(&booking.postal_code)),
                Row::new("Price Before Tax", format!("${}", quote.total_display())),
                Row::new("Price After Tax (13%)", format!("${}", quote.after_tax_display())),
                Row::new("Reference", reference.to_string()),
            ],
        }
    }

    /// Plain-text body, one `Label: value` line per row
    pub fn text(&self) -> String {
        self.rows
            .iter()
            .map(|row| format!("{}: {}\n", row.label, row.value))
            .collect()
    }

    /// HTML table body; submitted values are escaped
    pub fn html(&self) -> askama::Result<String> {
        NotificationTemplate {
            subject: self.subject,
            rows: &self.rows,
        }
        .render()
    }

    /// Address the notification from and to the operator mailbox
    pub fn into_email(self, operator: &str) -> askama::Result<OutboundEmail> {
        Ok(OutboundEmail {
            from: operator.to_string(),
            to: operator.to_string(),
            subject: self.subject.to_string(),
            html: self.html()?,
            text: self.text(),
        })
    }
}

fn specified(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_SPECIFIED)
}

fn quantity(value: Option<Decimal>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}
