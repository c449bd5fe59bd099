use tokio::sync::oneshot;

/// Completion signal for one delivery attempt.
///
/// The logging facade serializes writes on this signal, so the transport must
/// fire it exactly once on every path. That contract is structural rather
/// than by convention: [`Completion::signal`] consumes the guard, and
/// dropping an unsignalled guard (early return, panic unwind) fires it too.
#[derive(Debug)]
pub struct Completion {
    tx: Option<oneshot::Sender<()>>,
}

#[derive(Debug)]
pub struct CompletionReceiver {
    rx: oneshot::Receiver<()>,
}

impl Completion {
    pub fn channel() -> (Self, CompletionReceiver) {
        let (tx, rx) = oneshot::channel();
        (Self { tx: Some(tx) }, CompletionReceiver { rx })
    }

    /// Reports the attempt as finished, success or not.
    pub fn signal(mut self) {
        self.fire();
    }

    fn fire(&mut self) {
        if let Some(tx) = self.tx.take() {
            // The receiver may already be gone; nobody left to notify.
            let _ = tx.send(());
        }
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        self.fire();
    }
}

impl CompletionReceiver {
    /// Resolves once the paired [`Completion`] has fired.
    pub async fn wait(self) {
        let _ = self.rx.await;
    }
}
