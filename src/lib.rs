//! Intake API for a cleaning business's website forms.
//!
//! Two endpoints accept JSON submissions:
//!
//! - `POST /submit-contact` forwards a contact message to the operator.
//! - `POST /submit-booking` validates a booking request, prices it with the
//!   configured [`pricing::PricingVariant`], and mails the quote to the
//!   operator.
//!
//! Nothing is stored; each request either ends with the mail accepted by
//! the transport or with an error response.

pub mod config;
pub mod error;
pub mod forms;
pub mod notify;
pub mod pricing;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use notify::Mailer;
use pricing::PricingVariant;

/// Per-deployment settings the handlers need
#[derive(Debug, Clone)]
pub struct FormSettings {
    /// Operator mailbox notifications are sent from and to
    pub operator: String,
    pub variant: PricingVariant,
    pub mail_timeout: Duration,
}

impl FormSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            operator: config.email_user.clone(),
            variant: config.pricing_variant,
            mail_timeout: config.mail_timeout,
        }
    }
}

/// Shared, immutable handler state
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<FormSettings>,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(settings: FormSettings, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            settings: Arc::new(settings),
            mailer,
        }
    }
}

/// Public form endpoints accept any origin
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}

/// Build the application router with middleware and state
pub fn app(state: AppState) -> Router {
    routes::router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer()),
        )
        .with_state(state)
}
