//! Error handling for the application

use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::forms::responses::ErrorResponse;
use crate::forms::validation::ValidationError;
use crate::notify::DispatchError;
use crate::pricing::PriceOverflow;

/// Which form a failed dispatch belonged to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Booking,
}

impl FormKind {
    fn dispatch_failure_message(&self) -> &'static str {
        match self {
            FormKind::Contact => "Error submitting contact form. Please try again later.",
            FormKind::Booking => "Error submitting booking. Please try again later.",
        }
    }
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Failed to dispatch {form:?} notification: {source}")]
    Dispatch {
        form: FormKind,
        #[source]
        source: DispatchError,
    },

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedPayload(rejection.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::MalformedPayload(rejection.body_text())
    }
}

impl From<PriceOverflow> for AppError {
    fn from(e: PriceOverflow) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::MalformedPayload(detail) => {
                tracing::debug!("Rejected payload: {}", detail);
                (StatusCode::BAD_REQUEST, format!("Invalid request body. {}", detail))
            }
            AppError::Dispatch { form, source } => {
                tracing::error!("Error sending email: {}", source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    form.dispatch_failure_message().to_string(),
                )
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
