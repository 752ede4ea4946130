//! HTTP transport for the contact form.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use super::ContactTransport;
use crate::contact::ContactMessage;

/// Path of the contact endpoint, relative to the site origin.
pub const CONTACT_PATH: &str = "/api/contact";

/// Default origin for a locally running server.
pub const DEFAULT_SITE_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded {status}: {body}")]
    Status { status: u16, body: String },
}

/// Posts contact messages to a site's `/api/contact`.
#[derive(Debug, Clone)]
pub struct ContactClient {
    base_url: String,
    client: Client,
}

impl ContactClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, CONTACT_PATH)
    }
}

impl Default for ContactClient {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_URL)
    }
}

#[async_trait]
impl ContactTransport for ContactClient {
    async fn send(&self, message: &ContactMessage) -> Result<(), ClientError> {
        let response = self.client.post(self.endpoint()).json(message).send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}
