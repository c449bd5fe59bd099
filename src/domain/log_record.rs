use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// Free-form key/value mapping attached to a log record by the caller.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// A single structured log call as accepted from the host application.
///
/// This is the canonical representation of one log entry on its way to the
/// transport. `application_id` and `metadata` are explicit optionals; their
/// defaults are applied by [`LogPayload::resolve`], not here.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub metadata: Option<Metadata>,
    pub application_id: Option<String>,
}

impl LogRecord {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            metadata: None,
            application_id: None,
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    #[must_use]
    pub fn with_application_id(mut self, application_id: impl Into<String>) -> Self {
        self.application_id = Some(application_id.into());
        self
    }
}

/// The wire form of one record, exactly as posted to the collection endpoint.
///
/// Field names are camelCase in the JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogPayload {
    pub application_id: String,
    pub level: LogLevel,
    pub message: String,
    pub metadata: Metadata,
}

impl LogPayload {
    /// Resolves a record against the transport's default application id.
    ///
    /// The record-level override wins when present; `metadata` defaults to an
    /// empty mapping.
    pub fn resolve(record: LogRecord, default_application_id: &str) -> Self {
        Self {
            application_id: record
                .application_id
                .unwrap_or_else(|| default_application_id.to_string()),
            level: record.level,
            message: record.message,
            metadata: record.metadata.unwrap_or_default(),
        }
    }
}
