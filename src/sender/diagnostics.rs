#[cfg(test)]
use mockall::automock;

/// Destination for delivery-failure diagnostics.
///
/// Dropped records are reported here instead of being raised to the host
/// application. The sink is injectable so tests can assert on the exact
/// lines; production code uses [`StderrSink`].
#[cfg_attr(test, automock)]
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, message: &str);
}

/// Writes one diagnostic line per dropped record to standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&self, message: &str) {
        eprintln!("{message}");
    }
}
