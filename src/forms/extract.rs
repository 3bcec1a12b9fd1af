//! Request body extractor for form submissions.
//!
//! Browsers post either JSON or `application/x-www-form-urlencoded`; both
//! decode into the same request struct.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Decoded submission body, JSON unless the content type says form-encoded
#[derive(Debug, Clone)]
pub struct Submission<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Submission<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form_encoded(&req) {
            let Form(value) = Form::<T>::from_request(req, state).await?;
            Ok(Submission(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            Ok(Submission(value))
        }
    }
}

fn is_form_encoded(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            value
                .trim_start()
                .to_ascii_lowercase()
                .starts_with(FORM_URLENCODED)
        })
}
