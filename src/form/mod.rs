//! Client-side contact form.
//!
//! A [`ContactForm`] holds the three fields and a loading flag. A submit
//! validates, sends exactly one request through a [`ContactTransport`] and
//! turns the result into a [`Toast`]. Successful submissions clear the
//! fields; failed ones keep them so the visitor can try again.

mod client;

pub use client::*;

use std::fmt;
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::contact::ContactMessage;

/// The pattern browsers apply to `<input type="email">`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        };
        f.write_str(label)
    }
}

/// Reasons a submit never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(Field),

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("a submission is already in progress")]
    InFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// Outcome notification shown after a submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn sent() -> Self {
        Self {
            title: "Message sent!".to_string(),
            description: "I'll get back to you as soon as possible.".to_string(),
            variant: ToastVariant::Default,
        }
    }

    pub fn failed() -> Self {
        Self {
            title: "Uh oh! Something went wrong.".to_string(),
            description: "There was a problem with your request.".to_string(),
            variant: ToastVariant::Destructive,
        }
    }
}

/// Carries a contact message to the server.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<(), ClientError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    loading: bool,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            loading: false,
        }
    }

    /// Whether a submission is in flight. The submit button is disabled
    /// while this is set.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    pub fn validate(&self) -> Result<ContactMessage, FormError> {
        if self.name.is_empty() {
            return Err(FormError::Missing(Field::Name));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::Missing(Field::Email));
        }
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail);
        }
        if self.message.is_empty() {
            return Err(FormError::Missing(Field::Message));
        }

        Ok(ContactMessage {
            name: self.name.clone(),
            email: email.to_string(),
            message: self.message.clone(),
        })
    }

    /// Validate and take the loading gate.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, FormError> {
        if self.loading {
            return Err(FormError::InFlight);
        }
        let message = self.validate()?;
        self.loading = true;
        Ok(message)
    }

    /// Release the loading gate and report the outcome.
    pub fn finish_submit(&mut self, result: Result<(), ClientError>) -> Toast {
        self.loading = false;
        match result {
            Ok(()) => {
                self.reset();
                Toast::sent()
            }
            Err(e) => {
                tracing::warn!("Contact submission failed: {}", e);
                Toast::failed()
            }
        }
    }

    /// Send the form once through `transport`.
    pub async fn submit<T: ContactTransport + ?Sized>(
        &mut self,
        transport: &T,
    ) -> Result<Toast, FormError> {
        let message = self.begin_submit()?;
        let result = transport.send(&message).await;
        Ok(self.finish_submit(result))
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
        assert!(is_valid_email("user@localhost"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@-example.com"));
        assert!(!is_valid_email("a b@example.com"));
    }

    #[test]
    fn validation_reports_first_missing_field() {
        let form = ContactForm::new("", "", "");
        assert_eq!(form.validate(), Err(FormError::Missing(Field::Name)));

        let form = ContactForm::new("Ana", "a@b.com", "");
        assert_eq!(form.validate(), Err(FormError::Missing(Field::Message)));
    }

    #[test]
    fn whitespace_name_and_message_are_not_missing() {
        let form = ContactForm::new(" ", "a@b.com", "  \n ");
        let message = form.validate().expect("whitespace is a value");
        assert_eq!(message.name, " ");
        assert_eq!(message.message, "  \n ");
    }

    #[test]
    fn email_is_trimmed_before_validation() {
        let form = ContactForm::new("Ana", "  a@b.com ", "Hi");
        assert_eq!(form.validate().map(|m| m.email), Ok("a@b.com".to_string()));

        let form = ContactForm::new("Ana", "   ", "Hi");
        assert_eq!(form.validate(), Err(FormError::Missing(Field::Email)));
    }

    #[test]
    fn begin_submit_gates_double_submission() {
        let mut form = ContactForm::new("Ana", "a@b.com", "Hi");
        assert!(form.begin_submit().is_ok());
        assert!(form.is_loading());
        assert_eq!(form.begin_submit(), Err(FormError::InFlight));
    }

    #[test]
    fn invalid_form_does_not_take_the_gate() {
        let mut form = ContactForm::new("Ana", "not-an-email", "Hi");
        assert_eq!(form.begin_submit(), Err(FormError::InvalidEmail));
        assert!(!form.is_loading());
    }
}
