//! Structured notifications.
//!
//! The store never talks to a toast widget. It emits [`Notification`] values
//! through a [`Notifier`], and a thin adapter in the presentation layer
//! decides how to show them. [`ChannelNotifier`] forwards notifications over
//! a tokio channel for UI layers that drain them from an event loop;
//! [`NullNotifier`] drops them, for headless use and tests that only assert
//! on state.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Whether a notification reports a success or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

/// A user-facing operation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Success or failure
    pub outcome: Outcome,
    /// Message to show. For failures this is the backend's message verbatim.
    pub message: String,
}

impl Notification {
    /// A success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Success,
            message: message.into(),
        }
    }

    /// A failure notification.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Failure,
            message: message.into(),
        }
    }
}

/// Sink for notifications emitted by a store.
pub trait Notifier: Send + Sync {
    /// Deliver one notification. Must not block.
    fn notify(&self, notification: Notification);
}

/// Notifier that forwards over an unbounded channel.
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    /// Create a notifier and the receiving half for the presentation layer.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        // A dropped receiver means nobody is listening anymore; that is fine.
        let _ = self.tx.send(notification);
    }
}

/// Notifier that discards everything.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notification: Notification) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_notifier_forwards() {
        let (notifier, mut rx) = ChannelNotifier::new();

        notifier.notify(Notification::success("class created"));
        notifier.notify(Notification::failure("Network error"));

        assert_eq!(rx.try_recv().unwrap(), Notification::success("class created"));
        let failure = rx.try_recv().unwrap();
        assert_eq!(failure.outcome, Outcome::Failure);
        assert_eq!(failure.message, "Network error");
    }

    #[test]
    fn channel_notifier_survives_dropped_receiver() {
        let (notifier, rx) = ChannelNotifier::new();
        drop(rx);
        // Must not panic
        notifier.notify(Notification::success("ignored"));
    }
}
