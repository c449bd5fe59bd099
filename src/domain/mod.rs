//! Domain layer for logship.
//!
//! Contains the canonical types shared across all modules:
//! - `LogRecord`: One structured log call, before transport tagging
//! - `LogPayload`: The wire form of a record, after tagging
//! - `LogLevel`: Domain log severity (Debug/Info/Warn/Error)

pub mod log_level;
pub mod log_record;

pub use log_level::{LogLevel, ParseLevelError};
pub use log_record::{LogPayload, LogRecord, Metadata};
