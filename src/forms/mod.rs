//! Form payloads, their validation, and response bodies.

pub mod extract;
pub mod requests;
pub mod responses;
pub mod validation;

pub use extract::Submission;
pub use requests::{BookingRequest, ContactRequest};
pub use responses::{ErrorResponse, SubmissionResponse};
pub use validation::{Booking, Contact, ValidationError};
