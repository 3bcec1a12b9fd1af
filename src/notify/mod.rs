//! Outbound notification mail.
//!
//! Handlers format a [`Notification`] and hand the resulting
//! [`OutboundEmail`] to a [`Mailer`]. The SMTP implementation is used in
//! production; tests substitute their own.

pub mod format;
pub mod smtp;

use std::time::Duration;

use async_trait::async_trait;

pub use format::{Notification, Row};
pub use smtp::SmtpMailer;

/// A fully formatted message ready for transport
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("invalid mailbox: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("mail rejected: {0}")]
    Rejected(String),

    #[error("mail dispatch timed out after {0:?}")]
    TimedOut(Duration),
}

/// Mail transport used by the request handlers
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send one message. Resolves once the transport accepted or refused it.
    async fn send(&self, email: OutboundEmail) -> Result<(), DispatchError>;
}

/// Send `email`, giving up after `limit`.
pub async fn dispatch(
    mailer: &dyn Mailer,
    email: OutboundEmail,
    limit: Duration,
) -> Result<(), DispatchError> {
    match tokio::time::timeout(limit, mailer.send(email)).await {
        Ok(result) => result,
        Err(_) => Err(DispatchError::TimedOut(limit)),
    }
}
