use crate::domain::LogRecord;
use crate::sender::{Completion, Delivery, HttpTransport};
use tokio::sync::mpsc;
use tracing::trace;

/// Drains the record channel one delivery at a time.
///
/// The transport's completion signal gates the next dispatch, so at most one
/// request is in flight per logger and queued records leave in the order
/// they were logged. The loop ends when every sender handle is gone and the
/// queue is empty.
pub(super) async fn run<D: Delivery>(
    transport: HttpTransport<D>,
    mut records: mpsc::UnboundedReceiver<LogRecord>,
) {
    while let Some(record) = records.recv().await {
        let (done, acked) = Completion::channel();
        transport.emit(record, done).await;
        acked.wait().await;
    }

    trace!("log dispatch loop drained");
}
