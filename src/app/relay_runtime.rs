//! Background contact-form delivery so the UI thread never blocks on HTTP.

use tokio::sync::mpsc;

use crate::core::contact::Submission;
use crate::core::relay::{FormRelay, HttpRelay};
use crate::error::RelayError;

#[derive(Debug)]
pub enum RelayUpdate {
    Finished(Result<(), RelayError>),
}

/// Post `submission` to `endpoint` on a worker thread.
///
/// The blocking client owns its own runtime, so it is built on the worker
/// rather than inside the async event loop.
pub fn spawn_submission(
    tx: mpsc::UnboundedSender<RelayUpdate>,
    endpoint: String,
    submission: Submission,
) {
    tracing::info!(endpoint = %endpoint, "submitting contact form");
    spawn_with(tx, move || HttpRelay::new(endpoint), submission);
}

/// Deliver through whatever relay `make_relay` builds on the worker thread.
pub fn spawn_with<F, R>(tx: mpsc::UnboundedSender<RelayUpdate>, make_relay: F, submission: Submission)
where
    F: FnOnce() -> R + Send + 'static,
    R: FormRelay,
{
    std::thread::spawn(move || {
        let relay = make_relay();
        let result = relay.submit(&submission);
        if let Err(e) = &result {
            tracing::warn!("contact form not delivered: {e}");
        }
        let _ = tx.send(RelayUpdate::Finished(result));
    });
}
