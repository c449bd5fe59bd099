//! Transport layer: one log record in, one HTTP request out.
//!
//! [`HttpTransport`] is the adapter handed to the logger's dispatch loop;
//! [`HttpClient`] is its default [`Delivery`] backend. Failures never leave
//! this module on the emit path: they are reported to a [`DiagnosticSink`]
//! and the record is dropped.

pub mod client;
pub mod completion;
pub mod diagnostics;
pub mod transport;

pub use client::{ClientConfig, DEFAULT_ENDPOINT, Delivery, DeliveryError, HttpClient};
pub use completion::{Completion, CompletionReceiver};
pub use diagnostics::{DiagnosticSink, StderrSink};
pub use transport::HttpTransport;
