//! Daily API client for rooms, domain configuration, and meeting tokens.
//!
//! Callers supply and receive camelCase JSON payloads through the typed
//! structs in [`crate::types`]. The client converts keys to the snake_case
//! wire format on every outgoing body and query, and back to camelCase on
//! every response body, so neither side ever sees the other's convention.

use std::time::Duration;

use log::*;
use reqwest::Method;
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::case::{to_camel_case, to_snake_case};
use crate::error::{api_error, Error};
use crate::http::{build_client, HttpClientConfig};
use crate::types::{
    CreateRoomRequest, DeleteResponse, DomainConfig, DomainResponse, MeetingToken,
    MeetingTokenResponse, PaginatedRequest, PaginatedResponse, Room,
};

/// Daily REST API client.
pub struct Daily {
    client: reqwest::Client,
    base_url: String,
}

impl Daily {
    /// Create a client for the production API with default settings.
    pub fn new(api_key: SecretString) -> Result<Self, Error> {
        Self::builder().build(api_key)
    }

    /// Start building a client with custom settings.
    pub fn builder() -> DailyBuilder {
        DailyBuilder::new()
    }

    /// Get top-level configuration of the domain.
    pub async fn domain_config(&self) -> Result<DomainResponse, Error> {
        self.send(Method::GET, "/", None::<&()>, None::<&()>).await
    }

    /// Set top-level configuration options for the domain.
    pub async fn update_domain_config(&self, config: &DomainConfig) -> Result<DomainConfig, Error> {
        self.send(Method::POST, "/", Some(config), None::<&()>)
            .await
    }

    /// List rooms in the domain.
    pub async fn rooms(
        &self,
        params: Option<&PaginatedRequest>,
    ) -> Result<PaginatedResponse<Room>, Error> {
        self.send(Method::GET, "/rooms", None::<&()>, params).await
    }

    /// Create a room.
    pub async fn create_room(&self, request: &CreateRoomRequest) -> Result<Room, Error> {
        debug!("Creating room: {:?}", request.name);

        let room: Room = self
            .send(Method::POST, "/rooms", Some(request), None::<&()>)
            .await?;
        info!("Created room: {}", room.name);
        Ok(room)
    }

    /// Get info about a room.
    pub async fn room(&self, name: &str) -> Result<Room, Error> {
        self.send(
            Method::GET,
            &format!("/rooms/{name}"),
            None::<&()>,
            None::<&()>,
        )
        .await
    }

    /// Set a room's privacy and config properties.
    pub async fn update_room(&self, name: &str, room: &Room) -> Result<Room, Error> {
        debug!("Updating room: {name}");
        self.send(
            Method::POST,
            &format!("/rooms/{name}"),
            Some(room),
            None::<&()>,
        )
        .await
    }

    /// Delete a room.
    pub async fn delete_room(&self, name: &str) -> Result<DeleteResponse, Error> {
        let response: DeleteResponse = self
            .send(
                Method::DELETE,
                &format!("/rooms/{name}"),
                None::<&()>,
                None::<&()>,
            )
            .await?;
        info!("Deleted room: {}", response.name);
        Ok(response)
    }

    /// Create a new meeting token with the given properties.
    pub async fn create_meeting_token(
        &self,
        token: &MeetingToken,
    ) -> Result<MeetingTokenResponse, Error> {
        let request = serde_json::json!({ "properties": token });
        self.send(Method::POST, "/meeting-tokens", Some(&request), None::<&()>)
            .await
    }

    /// Validate a meeting token, returning its properties.
    pub async fn meeting_token(&self, token: &str) -> Result<MeetingToken, Error> {
        self.send(
            Method::GET,
            &format!("/meeting-tokens/{token}"),
            None::<&()>,
            None::<&()>,
        )
        .await
    }

    /// Send one API request.
    ///
    /// The body and query parameters are serialized from their camelCase
    /// convention and deep-converted to snake_case before sending; the
    /// response body is deep-converted back to camelCase before it is
    /// deserialized into the typed result.
    async fn send<B, Q, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        params: Option<&Q>,
    ) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, &url);

        if let Some(params) = params {
            let params = to_snake_case(serde_json::to_value(params)?);
            request = request.query(&params);
        }

        if let Some(body) = body {
            let body = to_snake_case(serde_json::to_value(body)?);
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|err| {
            warn!("Request to {url} failed: {err:?}");
            Error::from(err)
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!("Daily API error: {status} - {error_text}");
            return Err(api_error(status, error_text));
        }

        let body: Value = response.json().await.map_err(|err| {
            warn!("Failed to parse Daily API response: {err:?}");
            Error::from(err)
        })?;

        Ok(serde_json::from_value(to_camel_case(body))?)
    }
}

/// Builder for a [`Daily`] client with custom settings.
pub struct DailyBuilder {
    config: HttpClientConfig,
}

impl DailyBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: HttpClientConfig::default(),
        }
    }

    /// Override the base API URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent string.
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.config.user_agent = user_agent;
        self
    }

    /// Build the configured client.
    pub fn build(self, api_key: SecretString) -> Result<Daily, Error> {
        let client = build_client(&api_key, &self.config)?;

        Ok(Daily {
            client,
            base_url: self.config.base_url,
        })
    }
}

impl Default for DailyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
