//! Outbound email delivery.
//!
//! [`ResendClient`] talks to a Resend-compatible HTTP API. The API key is
//! read from its [`ApiKeySource`] on every send, so with the default
//! environment source a key added after startup is picked up and a missing
//! key only fails the send that needed it.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::OutboundEmail;

/// Default provider base URL.
pub const DEFAULT_API_URL: &str = "https://api.resend.com";
/// Environment variable holding the provider API key.
pub const API_KEY_VAR: &str = "RESEND_API_KEY";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("email provider API key is not set ({0})")]
    MissingApiKey(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("email provider rejected the message ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Provider acknowledgement of an accepted email.
///
/// `id` is `None` when the provider accepted the email but its reply could
/// not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentEmail {
    #[serde(default)]
    pub id: Option<String>,
}

/// Delivers one email per call. No retries.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<SentEmail, ProviderError>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Where [`ResendClient`] gets its API key on each send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeySource {
    /// Read the named environment variable.
    Env(String),
    /// A key held in memory; `None` behaves like an unset variable.
    Fixed(Option<String>),
}

impl ApiKeySource {
    fn read(&self) -> Result<String, ProviderError> {
        let (key, name) = match self {
            ApiKeySource::Env(var) => (std::env::var(var).ok(), var.as_str()),
            ApiKeySource::Fixed(key) => (key.clone(), "fixed key"),
        };
        key.filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ProviderError::MissingApiKey(name.to_string()))
    }
}

impl Default for ApiKeySource {
    fn default() -> Self {
        ApiKeySource::Env(API_KEY_VAR.to_string())
    }
}

/// HTTP client for a Resend-compatible email API.
#[derive(Debug, Clone)]
pub struct ResendClient {
    base_url: String,
    api_key: ApiKeySource,
    client: Client,
}

impl ResendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: ApiKeySource::default(),
            client: Client::new(),
        }
    }

    pub fn with_api_key(mut self, source: ApiKeySource) -> Self {
        self.api_key = source;
        self
    }
}

impl Default for ResendClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[async_trait]
impl EmailProvider for ResendClient {
    async fn send(&self, email: &OutboundEmail) -> Result<SentEmail, ProviderError> {
        let api_key = self.api_key.read()?;
        let response = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            // Accepted means sent, whatever the reply body looks like.
            let body = response.text().await.unwrap_or_default();
            let sent = serde_json::from_str::<SentEmail>(&body).unwrap_or_else(|e| {
                tracing::warn!("Unreadable reply for accepted email: {}", e);
                SentEmail { id: None }
            });
            Ok(sent)
        } else {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or(body);
            Err(ProviderError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn email() -> OutboundEmail {
        OutboundEmail {
            from: "onboarding@resend.dev".to_string(),
            to: vec!["owner@example.com".to_string()],
            subject: "New message from Ana".to_string(),
            html: "<p>Hi</p>".to_string(),
        }
    }

    fn key() -> ApiKeySource {
        ApiKeySource::Fixed(Some("re_123".to_string()))
    }

    #[test]
    fn unset_env_var_is_a_missing_key() {
        let source = ApiKeySource::Env("FOLIO_TEST_KEY_NEVER_SET".to_string());
        assert!(matches!(source.read(), Err(ProviderError::MissingApiKey(_))));
    }

    #[test]
    fn blank_fixed_key_is_a_missing_key() {
        let source = ApiKeySource::Fixed(Some("  ".to_string()));
        assert!(matches!(source.read(), Err(ProviderError::MissingApiKey(_))));
    }

    #[tokio::test]
    async fn accepted_email_with_empty_reply_is_sent() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/emails");
                then.status(200).body("");
            })
            .await;

        let client = ResendClient::new(server.base_url()).with_api_key(key());
        let sent = client.send(&email()).await.expect("accepted email counts as sent");

        mock.assert_hits_async(1).await;
        assert_eq!(sent.id, None);
    }

    #[tokio::test]
    async fn sends_with_bearer_key() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/emails")
                    .header("authorization", "Bearer re_123")
                    .json_body_partial(r#"{"subject":"New message from Ana"}"#);
                then.status(200).json_body(serde_json::json!({ "id": "em_1" }));
            })
            .await;

        let client = ResendClient::new(server.base_url()).with_api_key(key());
        let sent = client.send(&email()).await.expect("send failed");

        mock.assert_async().await;
        assert_eq!(sent.id.as_deref(), Some("em_1"));
    }

    #[tokio::test]
    async fn provider_error_becomes_rejected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/emails");
                then.status(422).json_body(serde_json::json!({
                    "statusCode": 422,
                    "name": "validation_error",
                    "message": "Invalid `to` field"
                }));
            })
            .await;

        let client = ResendClient::new(server.base_url()).with_api_key(key());
        let err = client.send(&email()).await.unwrap_err();

        match err {
            ProviderError::Rejected { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "Invalid `to` field");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn missing_key_fails_without_calling_out() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/emails");
                then.status(200).json_body(serde_json::json!({ "id": "never" }));
            })
            .await;

        let client =
            ResendClient::new(server.base_url()).with_api_key(ApiKeySource::Fixed(None));
        let err = client.send(&email()).await.unwrap_err();

        assert!(matches!(err, ProviderError::MissingApiKey(_)));
        mock.assert_hits_async(0).await;
    }
}
