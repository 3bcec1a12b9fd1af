//! HTTP routes for the form endpoints

pub mod booking;
pub mod contact;

use axum::{routing::post, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submit-contact", post(contact::submit))
        .route("/submit-booking", post(booking::submit))
}
