//! Operation outcome notifications.
//!
//! The engine reports outcomes through [`Notifier`]; how they are shown
//! (toast, console, nothing) is entirely the host application's concern.
//! Delivery is fire-and-forget - the engine never reads anything back.

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    /// An operation was confirmed.
    Success,
    /// An operation failed and may be retried.
    Error,
}

/// Fire-and-forget outcome sink.
pub trait Notifier {
    /// Deliver one message. Must not block or fail.
    fn notify(&self, kind: NoteKind, message: &str);
}

/// Notifier that forwards outcomes to the `tracing` log stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, kind: NoteKind, message: &str) {
        match kind {
            NoteKind::Success => tracing::info!(target: "roster::notify", "{message}"),
            NoteKind::Error => tracing::warn!(target: "roster::notify", "{message}"),
        }
    }
}
