//! Configured reqwest client with authentication headers.

use std::time::Duration;

use log::*;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{Error, ErrorKind, HttpErrorKind};

/// Production REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.daily.co/v1";

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base API URL.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(15),
            user_agent: format!("daily-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Build an HTTP client with the API key installed as a sensitive default
/// `Authorization: Bearer` header.
pub(crate) fn build_client(
    api_key: &SecretString,
    config: &HttpClientConfig,
) -> Result<reqwest::Client, Error> {
    let headers = build_auth_headers(api_key)?;

    Ok(reqwest::Client::builder()
        .use_rustls_tls()
        .timeout(config.timeout)
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .build()?)
}

fn build_auth_headers(api_key: &SecretString) -> Result<reqwest::header::HeaderMap, Error> {
    let mut headers = reqwest::header::HeaderMap::new();

    let auth_value = format!("Bearer {}", api_key.expose_secret());
    let mut auth_header = reqwest::header::HeaderValue::from_str(&auth_value).map_err(|err| {
        warn!("Failed to create authorization header value: {err:?}");
        Error {
            source: Some(Box::new(err)),
            error_kind: ErrorKind::Http(HttpErrorKind::BuilderFailed),
        }
    })?;
    auth_header.set_sensitive(true);
    headers.insert(reqwest::header::AUTHORIZATION, auth_header);

    headers.insert(
        reqwest::header::CONTENT_TYPE,
        reqwest::header::HeaderValue::from_static("application/json"),
    );

    Ok(headers)
}
