//! Logger facade and factory.
//!
//! [`initialize_logger`] is the validate-then-construct entry point: it
//! rejects a missing credential before any transport exists, then returns a
//! [`Logger`] whose sole output sink is one [`HttpTransport`]. Log calls
//! never block and never fail; records travel over a channel to a dispatch
//! loop that keeps a single delivery in flight.

pub mod config;
mod worker;

pub use config::{ConfigError, LoggerConfig};

use crate::domain::{LogLevel, LogRecord, Metadata};
use crate::sender::{ClientConfig, Delivery, HttpTransport};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Optional structured payload attached to a single log call.
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub metadata: Option<Metadata>,
    /// Overrides the logger's application id for this record only.
    pub application_id: Option<String>,
}

/// A logger bound to exactly one transport adapter.
///
/// Dropping the logger stops the dispatch loop once the queue is drained;
/// [`Logger::close`] does the same but waits for the drain to finish.
#[derive(Debug)]
pub struct Logger {
    records: mpsc::UnboundedSender<LogRecord>,
    level: LogLevel,
    worker: JoinHandle<()>,
}

/// Validates the credential and produces a ready-to-use [`Logger`].
///
/// Fails with [`ConfigError::MissingApiToken`] on an empty token, before any
/// transport is constructed and without any network activity. `endpoint`
/// falls back to [`crate::sender::DEFAULT_ENDPOINT`] when `None`.
///
/// Must be called from within a Tokio runtime.
pub fn initialize_logger(
    application_id: &str,
    api_token: &str,
    endpoint: Option<&str>,
) -> Result<Logger, ConfigError> {
    let mut config = LoggerConfig::new(application_id, api_token);
    if let Some(endpoint) = endpoint {
        config = config.with_endpoint(endpoint);
    }
    Logger::new(config)
}

impl Logger {
    /// See [`initialize_logger`]; this is the same operation over a
    /// [`LoggerConfig`].
    pub fn new(config: LoggerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let client_config = ClientConfig {
            api_token: config.api_token.clone(),
            endpoint: config.endpoint_or_default().to_string(),
            ..ClientConfig::default()
        };
        let transport = HttpTransport::new(client_config, config.application_id.clone())
            .map_err(|e| ConfigError::ClientBuild(e.to_string()))?;

        Ok(Self::from_transport(transport, config.level))
    }

    /// Binds a logger to an already-built transport. Bypasses validation;
    /// the transport sends whatever credential it was given.
    pub fn from_transport<D>(transport: HttpTransport<D>, level: LogLevel) -> Self
    where
        D: Delivery + 'static,
    {
        let (records, rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(worker::run(transport, rx));

        Self {
            records,
            level,
            worker,
        }
    }

    /// Queues one record. Never blocks, never errors: a record below the
    /// minimum level, or one logged after [`Logger::close`], is discarded.
    pub fn log(&self, level: LogLevel, message: impl Into<String>, options: LogOptions) {
        if level < self.level {
            return;
        }

        let record = LogRecord {
            level,
            message: message.into(),
            metadata: options.metadata,
            application_id: options.application_id,
        };
        let _ = self.records.send(record);
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message, LogOptions::default());
    }

    pub fn debug_with(&self, message: impl Into<String>, options: LogOptions) {
        self.log(LogLevel::Debug, message, options);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message, LogOptions::default());
    }

    pub fn info_with(&self, message: impl Into<String>, options: LogOptions) {
        self.log(LogLevel::Info, message, options);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message, LogOptions::default());
    }

    pub fn warn_with(&self, message: impl Into<String>, options: LogOptions) {
        self.log(LogLevel::Warn, message, options);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message, LogOptions::default());
    }

    pub fn error_with(&self, message: impl Into<String>, options: LogOptions) {
        self.log(LogLevel::Error, message, options);
    }

    /// Stops accepting records and waits until queued ones have been
    /// attempted. Best-effort semantics are unchanged: records that fail to
    /// deliver during the drain are still dropped.
    pub async fn close(self) {
        drop(self.records);
        let _ = self.worker.await;
    }
}
