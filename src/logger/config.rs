use crate::domain::LogLevel;
use crate::sender::DEFAULT_ENDPOINT;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("API token is required to initialize the logger")]
    MissingApiToken,
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

/// Settings for one logger and the single transport behind it.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub application_id: String,
    pub api_token: String,
    /// Collection endpoint; [`DEFAULT_ENDPOINT`] when absent.
    pub endpoint: Option<String>,
    /// Minimum severity; records below it are discarded locally.
    pub level: LogLevel,
}

impl LoggerConfig {
    pub fn new(application_id: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            api_token: api_token.into(),
            endpoint: None,
            level: LogLevel::Info,
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// All validation for the logger path lives here; the transport itself
    /// accepts whatever it is handed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_token.is_empty() {
            return Err(ConfigError::MissingApiToken);
        }

        if let Some(endpoint) = &self.endpoint {
            Url::parse(endpoint).map_err(|e| {
                ConfigError::InvalidUrl(format!("Invalid endpoint URL '{endpoint}': {e}"))
            })?;
        }

        Ok(())
    }

    pub fn endpoint_or_default(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}
