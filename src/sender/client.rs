use crate::domain::LogPayload;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[cfg(test)]
use mockall::automock;

/// Endpoint used when the caller does not configure one.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/logs";

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("HTTP error: {status}")]
    Http { status: u16 },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Network error: {0}")]
    Network(String),
}

/// Connection settings for the outbound HTTP client.
///
/// There is deliberately no request timeout: a hung collector delays only
/// that record's completion signal, it never errors the host application.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_token: String,
    pub endpoint: String,
    pub max_connections: usize,
    pub keep_alive_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_connections: 4,
            keep_alive_timeout: Duration::from_secs(60),
            user_agent: concat!("logship/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

// Trait for mocking the delivery backend
#[cfg_attr(test, automock)]
pub trait Delivery: Send + Sync {
    /// One delivery attempt for one payload. At most once, no retry.
    fn deliver(
        &self,
        payload: LogPayload,
    ) -> impl std::future::Future<Output = Result<(), DeliveryError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Builds the client without touching the network.
    ///
    /// No validation happens here either: the token (even an empty one) and
    /// the endpoint string are used as given, and a bad endpoint surfaces as
    /// a [`DeliveryError`] on the first delivery attempt.
    pub fn new(config: ClientConfig) -> Result<Self, DeliveryError> {
        let client = ClientBuilder::new()
            .pool_max_idle_per_host(config.max_connections)
            .pool_idle_timeout(config.keep_alive_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                DeliveryError::InvalidConfiguration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

impl Delivery for HttpClient {
    async fn deliver(&self, payload: LogPayload) -> Result<(), DeliveryError> {
        debug!(
            endpoint = %self.config.endpoint,
            level = %payload.level,
            "sending log record"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_token)
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| DeliveryError::Network(e.to_string()))?;

        // The response body is never consumed; only the status matters.
        if response.status().is_success() {
            Ok(())
        } else {
            Err(DeliveryError::Http {
                status: response.status().as_u16(),
            })
        }
    }
}
