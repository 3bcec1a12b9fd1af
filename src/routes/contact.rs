//! Contact form handler

use axum::{extract::State, Json};
use tracing::info;
use uuid::Uuid;

use crate::error::{AppError, FormKind, Result};
use crate::forms::responses::CONTACT_ACCEPTED;
use crate::forms::{validation, ContactRequest, Submission, SubmissionResponse};
use crate::notify::{self, Notification};
use crate::AppState;

/// `POST /submit-contact`
pub async fn submit(
    State(state): State<AppState>,
    Submission(request): Submission<ContactRequest>,
) -> Result<Json<SubmissionResponse>> {
    let contact = validation::validate_contact(request)?;

    let reference = Uuid::new_v4();
    info!(%reference, email = %contact.email, "Contact form submission received");

    let email = Notification::contact(&contact, reference).into_email(&state.settings.operator)?;
    notify::dispatch(state.mailer.as_ref(), email, state.settings.mail_timeout)
        .await
        .map_err(|source| AppError::Dispatch {
            form: FormKind::Contact,
            source,
        })?;

    info!("Contact notification sent: {}", reference);
    Ok(Json(SubmissionResponse::new(CONTACT_ACCEPTED)))
}
