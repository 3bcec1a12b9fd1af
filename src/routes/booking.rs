//! Booking form handler

use axum::{extract::State, Json};
use chrono::Local;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{AppError, FormKind, Result};
use crate::forms::responses::BOOKING_ACCEPTED;
use crate::forms::{validation, BookingRequest, Submission, SubmissionResponse};
use crate::notify::{self, Notification};
use crate::pricing;
use crate::AppState;

/// `POST /submit-booking`
///
/// Validates against the configured variant, prices the booking, and mails
/// the quote to the operator. Nothing is sent when validation fails.
pub async fn submit(
    State(state): State<AppState>,
    Submission(request): Submission<BookingRequest>,
) -> Result<Json<SubmissionResponse>> {
    let settings = &state.settings;

    let today = Local::now().date_naive();
    let booking = validation::validate_booking(request, settings.variant, today)?;
    let quote = pricing::calculate_quote(settings.variant, &booking.pricing_input())?;

    let reference = Uuid::new_v4();
    if !quote.rule_matched {
        warn!(
            %reference,
            variant = %settings.variant,
            "No pricing rule matched booking, quoting fallback rate"
        );
    }
    info!(
        %reference,
        total = %quote.total_display(),
        after_tax = %quote.after_tax_display(),
        "Valid booking request received"
    );

    let email = Notification::booking(&booking, &quote, reference).into_email(&settings.operator)?;
    notify::dispatch(state.mailer.as_ref(), email, settings.mail_timeout)
        .await
        .map_err(|source| AppError::Dispatch {
            form: FormKind::Booking,
            source,
        })?;

    info!("Booking notification sent: {}", reference);
    Ok(Json(SubmissionResponse::new(BOOKING_ACCEPTED)))
}
