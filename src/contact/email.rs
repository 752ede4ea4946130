use serde::{Deserialize, Serialize};

use super::ContactMessage;
use crate::config::ContactConfig;

/// A send request for the transactional email provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

/// Build the notification email for a contact message.
///
/// Fields are embedded into the HTML body as submitted, without escaping.
pub fn compose(message: &ContactMessage, config: &ContactConfig) -> OutboundEmail {
    let html = format!(
        "\n<h2>New message from your portfolio contact form</h2>\n\
         <p><strong>Name:</strong> {}</p>\n\
         <p><strong>Email:</strong> {}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <p>{}</p>\n",
        message.name, message.email, message.message
    );

    OutboundEmail {
        from: config.from.clone(),
        to: config.to.clone(),
        subject: format!("New message from {}", message.name),
        html,
    }
}
