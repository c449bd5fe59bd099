use super::client::{ClientConfig, Delivery, DeliveryError, HttpClient};
use super::completion::Completion;
use super::diagnostics::{DiagnosticSink, StderrSink};
use crate::domain::{LogPayload, LogRecord};
use std::sync::Arc;
use tracing::warn;

/// The transport adapter: turns one log record into one outbound request.
///
/// Delivery is best-effort and at-most-once. A failed attempt is terminal for
/// that record: the error is reported to the diagnostic sink and swallowed,
/// never raised to the caller, and the completion signal fires regardless so
/// the dispatch loop is never stalled by a lost record.
pub struct HttpTransport<D = HttpClient> {
    delivery: D,
    application_id: String,
    sink: Arc<dyn DiagnosticSink>,
}

impl HttpTransport<HttpClient> {
    /// Builds the adapter over the default HTTP backend.
    ///
    /// Stores the configuration as given; credential validation is the
    /// factory's job, not the adapter's.
    pub fn new(
        config: ClientConfig,
        application_id: impl Into<String>,
    ) -> Result<Self, DeliveryError> {
        Ok(Self::with_parts(
            HttpClient::new(config)?,
            application_id,
            Arc::new(StderrSink),
        ))
    }
}

impl<D: Delivery> HttpTransport<D> {
    pub fn with_parts(
        delivery: D,
        application_id: impl Into<String>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            delivery,
            application_id: application_id.into(),
            sink,
        }
    }

    /// Delivers one record, then signals `done`.
    ///
    /// `done` fires exactly once on every path: explicitly after the attempt,
    /// or through its drop guard if this future unwinds.
    pub async fn emit(&self, record: LogRecord, done: Completion) {
        let payload = LogPayload::resolve(record, &self.application_id);

        if let Err(err) = self.delivery.deliver(payload).await {
            warn!(error = %err, "log delivery failed, dropping record");
            self.sink.report(&format!("Failed to send log: {err}"));
        }

        done.signal();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LogLevel;
    use crate::sender::diagnostics::MockDiagnosticSink;
    use std::sync::Mutex;

    /// Delivery backend that records payloads instead of sending them.
    #[derive(Default)]
    struct RecordingDelivery {
        payloads: Mutex<Vec<LogPayload>>,
        fail_with: Option<fn() -> DeliveryError>,
    }

    impl Delivery for RecordingDelivery {
        async fn deliver(&self, payload: LogPayload) -> Result<(), DeliveryError> {
            self.payloads.lock().unwrap().push(payload);
            match self.fail_with {
                Some(make_err) => Err(make_err()),
                None => Ok(()),
            }
        }
    }

    fn silent_sink() -> Arc<MockDiagnosticSink> {
        let mut sink = MockDiagnosticSink::new();
        sink.expect_report().never();
        Arc::new(sink)
    }

    #[tokio::test]
    async fn test_emit_tags_payload_with_default_application_id() {
        let delivery = RecordingDelivery::default();
        let transport = HttpTransport::with_parts(delivery, "test-app", silent_sink());

        let (done, acked) = Completion::channel();
        transport
            .emit(LogRecord::new(LogLevel::Info, "Test log"), done)
            .await;
        acked.wait().await;

        let payloads = transport.delivery.payloads.lock().unwrap();
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].application_id, "test-app");
        assert!(payloads[0].metadata.is_empty());
    }

    #[tokio::test]
    async fn test_emit_honors_record_level_override() {
        let delivery = RecordingDelivery::default();
        let transport = HttpTransport::with_parts(delivery, "test-app", silent_sink());

        let record =
            LogRecord::new(LogLevel::Info, "Overridden app log").with_application_id("override-app");
        let (done, acked) = Completion::channel();
        transport.emit(record, done).await;
        acked.wait().await;

        let payloads = transport.delivery.payloads.lock().unwrap();
        assert_eq!(payloads[0].application_id, "override-app");
    }

    #[tokio::test]
    async fn test_emit_reports_failure_and_still_completes() {
        let delivery = RecordingDelivery {
            fail_with: Some(|| DeliveryError::Network("Network error".to_string())),
            ..Default::default()
        };

        let mut sink = MockDiagnosticSink::new();
        sink.expect_report()
            .once()
            .withf(|message| {
                message.starts_with("Failed to send log:") && message.contains("Network error")
            })
            .return_const(());

        let transport = HttpTransport::with_parts(delivery, "test-app", Arc::new(sink));

        let (done, acked) = Completion::channel();
        transport
            .emit(LogRecord::new(LogLevel::Error, "Failed log"), done)
            .await;

        // The completion still resolves; the failure never escapes emit.
        acked.wait().await;
    }

    #[tokio::test]
    async fn test_emit_success_writes_no_diagnostics() {
        let delivery = RecordingDelivery::default();
        let transport = HttpTransport::with_parts(delivery, "test-app", silent_sink());

        let (done, acked) = Completion::channel();
        transport
            .emit(LogRecord::new(LogLevel::Info, "Test log"), done)
            .await;
        acked.wait().await;
    }
}
