//! Contact messages and their delivery by email.
//!
//! - [`ContactMessage`]: what a visitor submits, sent once and never stored.
//! - [`OutboundEmail`]: the provider request built from it by [`compose`].
//! - [`EmailProvider`]: the single outbound call, implemented over HTTP by
//!   [`ResendClient`].

mod email;
mod provider;

pub use email::*;
pub use provider::*;

use serde::{Deserialize, Serialize};

/// Body returned by `POST /api/contact` on success.
pub const SENT_MESSAGE: &str = "Email sent successfully!";
/// Body returned by `POST /api/contact` on any failure.
pub const FAILED_MESSAGE: &str = "Error sending email";

/// A visitor's message from the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Response body of the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub message: String,
}

impl ContactResponse {
    pub fn sent() -> Self {
        Self {
            message: SENT_MESSAGE.to_string(),
        }
    }

    pub fn failed() -> Self {
        Self {
            message: FAILED_MESSAGE.to_string(),
        }
    }
}
