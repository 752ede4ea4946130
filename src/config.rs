//! Server configuration loaded from environment variables.
//!
//! The provider API key is deliberately not part of this struct: it is read
//! by [`ResendClient`](crate::contact::ResendClient) at send time.

use crate::contact::DEFAULT_API_URL;

const DEFAULT_FROM: &str = "onboarding@resend.dev";
const DEFAULT_TO: &str = "owner@example.com";

/// Sender and recipients of contact notifications.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactConfig {
    pub from: String,
    pub to: Vec<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            from: DEFAULT_FROM.to_string(),
            to: vec![DEFAULT_TO.to_string()],
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub contact: ContactConfig,
    /// Base URL of the email provider (from FOLIO_EMAIL_API_URL)
    pub email_api_url: String,
    /// Allowed CORS origins (from FOLIO_CORS_ORIGINS, comma-separated).
    /// `None` serves same-origin requests only.
    pub cors_origins: Option<Vec<String>>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let from = std::env::var("FOLIO_CONTACT_FROM")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FROM.to_string());

        let to = std::env::var("FOLIO_CONTACT_TO")
            .ok()
            .map(|s| split_list(&s))
            .filter(|list| !list.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_TO.to_string()]);

        let email_api_url = std::env::var("FOLIO_EMAIL_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let cors_origins = std::env::var("FOLIO_CORS_ORIGINS")
            .ok()
            .map(|s| split_list(&s))
            .filter(|list| !list.is_empty());

        Self {
            contact: ContactConfig { from, to },
            email_api_url,
            cors_origins,
        }
    }

    /// Defaults without reading the environment (for testing).
    pub fn local() -> Self {
        Self {
            contact: ContactConfig::default(),
            email_api_url: DEFAULT_API_URL.to_string(),
            cors_origins: None,
        }
    }

    /// Create a config that only allows specific CORS origins.
    pub fn with_cors_origins(origins: Vec<String>) -> Self {
        Self {
            cors_origins: Some(origins),
            ..Self::local()
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_trims_and_drops_empties() {
        assert_eq!(
            split_list(" a@x.com, ,b@x.com "),
            vec!["a@x.com".to_string(), "b@x.com".to_string()]
        );
    }

    #[test]
    fn local_config_has_no_cors_origins() {
        let config = ServerConfig::local();
        assert!(config.cors_origins.is_none());
        assert_eq!(config.contact, ContactConfig::default());
    }

    #[test]
    fn with_cors_origins_keeps_defaults() {
        let config = ServerConfig::with_cors_origins(vec!["https://example.com".to_string()]);
        assert_eq!(config.email_api_url, DEFAULT_API_URL);
        assert_eq!(config.cors_origins.map(|o| o.len()), Some(1));
    }
}
