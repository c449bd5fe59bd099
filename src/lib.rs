#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::missing_errors_doc,      // Internal API
    clippy::missing_panics_doc,      // Internal API
    clippy::module_name_repetitions, // e.g. ClientConfig in client module
    clippy::must_use_candidate,      // Annotated selectively on critical APIs
    clippy::doc_markdown             // Internal API
)]

pub mod domain;
pub mod logger;
pub mod sender;

// Re-export main types for easy access
pub use domain::{LogLevel, LogPayload, LogRecord, Metadata};
pub use logger::{ConfigError, LogOptions, Logger, LoggerConfig, initialize_logger};
pub use sender::{
    ClientConfig, Completion, CompletionReceiver, DEFAULT_ENDPOINT, Delivery, DeliveryError,
    DiagnosticSink, HttpClient, HttpTransport, StderrSink,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
