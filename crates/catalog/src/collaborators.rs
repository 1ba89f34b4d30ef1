//! Interfaces to the collaborators that surround the core.
//!
//! The deck and the job board never reach for globals: they receive a
//! [`Notifier`], a [`ProfilePresenter`] and a [`ConnectionCounter`] when
//! they are built.

use crate::types::ProfileId;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing::{info, warn};

// =============================================================================
// Notifications
// =============================================================================

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

/// A fire-and-forget message for the toast area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    pub fn destructive(mut self) -> Self {
        self.severity = Severity::Destructive;
        self
    }

    pub fn skipped(name: &str) -> Self {
        Self::new("Skipped", format!("You skipped {name}")).destructive()
    }

    pub fn connected(name: &str) -> Self {
        Self::new("Connected!", format!("You connected with {name}"))
    }

    pub fn deck_reset() -> Self {
        Self::new("Cards Reset", "Starting from the beginning")
    }

    pub fn filter_added(token: &str) -> Self {
        Self::new(format!("Filter Added: {token}"), "Results updated")
    }

    pub fn filters_reset() -> Self {
        Self::new("Filters Reset", "Showing all available jobs")
    }

    pub fn applied(title: &str, company: &str) -> Self {
        Self::new(
            "Application Submitted",
            format!("You applied for {title} at {company}"),
        )
    }

    pub fn connection_requested(name: &str) -> Self {
        Self::new(
            "Connection Request Sent",
            format!("You sent a connection request to {name}"),
        )
    }

    pub fn location_changed(location: &str) -> Self {
        Self::new(
            "Location Changed",
            format!("Your location has been updated to {location}"),
        )
    }

    pub fn search_expanded(radius_miles: u32) -> Self {
        Self::new(
            "Map Expanded",
            format!("Showing all professionals in a {radius_miles} mile radius"),
        )
    }
}

/// Sink for notifications. Implementations must not block the caller.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes every notification to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Default => info!(
                title = %notification.title,
                "{}",
                notification.description
            ),
            Severity::Destructive => warn!(
                title = %notification.title,
                "{}",
                notification.description
            ),
        }
    }
}

/// Keeps every notification it receives, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    received: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything received so far
    pub fn received(&self) -> Vec<Notification> {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.received().into_iter().map(|n| n.title).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(notification);
    }
}

/// Forwards notifications into an unbounded tokio channel.
///
/// A closed receiver drops the notification; the caller is never told.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        let _ = self.tx.send(notification);
    }
}

// =============================================================================
// Profile detail
// =============================================================================

/// Displays the detail view for a profile. The core only calls it.
pub trait ProfilePresenter: Send + Sync {
    fn show_profile(&self, id: ProfileId);
}

/// Remembers which profile detail views were requested.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    shown: Arc<Mutex<Vec<ProfileId>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Vec<ProfileId> {
        self.shown
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl ProfilePresenter for RecordingPresenter {
    fn show_profile(&self, id: ProfileId) {
        self.shown
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(id);
    }
}

// =============================================================================
// Connection counter
// =============================================================================

/// Process-wide connection count. Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct ConnectionCounter {
    count: Arc<AtomicU64>,
}

impl ConnectionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one connection and return the new total
    pub fn increment(&self) -> u64 {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn get(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_notification_is_destructive() {
        let n = Notification::skipped("Emily Chen");
        assert_eq!(n.title, "Skipped");
        assert_eq!(n.description, "You skipped Emily Chen");
        assert_eq!(n.severity, Severity::Destructive);
    }

    #[test]
    fn test_counter_clones_share_state() {
        let counter = ConnectionCounter::new();
        let other = counter.clone();
        assert_eq!(counter.increment(), 1);
        assert_eq!(other.increment(), 2);
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn test_recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Notification::deck_reset());
        notifier.notify(Notification::filters_reset());
        assert_eq!(notifier.titles(), vec!["Cards Reset", "Filters Reset"]);
    }

    #[tokio::test]
    async fn test_channel_notifier_delivers_and_survives_closed_receiver() {
        let (notifier, mut rx) = ChannelNotifier::new();
        notifier.notify(Notification::connected("Sarah Johnson"));
        let got = rx.recv().await.unwrap();
        assert_eq!(got.title, "Connected!");

        drop(rx);
        // Must not panic or block
        notifier.notify(Notification::deck_reset());
    }
}
