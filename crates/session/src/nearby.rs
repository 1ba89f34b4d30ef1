//! Nearby tab: professionals around the current location.

use catalog::{ConnectionCounter, NearbyProfessional, Notification, Notifier};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

pub const DEFAULT_LOCATION: &str = "San Francisco, CA";

/// Radius shown after expanding the map
pub const EXPANDED_RADIUS_MILES: u32 = 10;

pub struct NearbySession {
    professionals: Vec<NearbyProfessional>,
    location: String,
    /// Professionals with a request already sent
    pending: HashSet<u32>,
    notifier: Arc<dyn Notifier>,
    connections: ConnectionCounter,
}

impl NearbySession {
    pub fn new(
        professionals: Vec<NearbyProfessional>,
        notifier: Arc<dyn Notifier>,
        connections: ConnectionCounter,
    ) -> Self {
        Self {
            professionals,
            location: DEFAULT_LOCATION.to_string(),
            pending: HashSet::new(),
            notifier,
            connections,
        }
    }

    pub fn professionals(&self) -> &[NearbyProfessional] {
        &self.professionals
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn change_location(&mut self, location: &str) {
        self.location = location.to_string();
        self.notifier.notify(Notification::location_changed(location));
    }

    pub fn expand_search(&self) {
        self.notifier
            .notify(Notification::search_expanded(EXPANDED_RADIUS_MILES));
    }

    /// True once a request to `id` has been sent
    pub fn is_pending(&self, id: u32) -> bool {
        self.pending.contains(&id)
    }

    /// Send a connection request. Counts toward the shared connection total.
    ///
    /// Returns false for an unknown id or when a request is already pending.
    pub fn connect(&mut self, id: u32) -> bool {
        let Some(professional) = self.professionals.iter().find(|p| p.id == id) else {
            return false;
        };
        if !self.pending.insert(id) {
            debug!("Request to {} already pending", professional.name);
            return false;
        }
        let total = self.connections.increment();
        self.notifier
            .notify(Notification::connection_requested(&professional.name));
        info!(
            "Connection request to {} (total connections: {})",
            professional.name, total
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Catalog, RecordingNotifier};

    #[test]
    fn test_connect_shares_counter() {
        let notifier = RecordingNotifier::new();
        let counter = ConnectionCounter::new();
        let mut nearby = NearbySession::new(
            Catalog::seed().nearby().to_vec(),
            Arc::new(notifier.clone()),
            counter.clone(),
        );

        assert!(nearby.connect(1));
        assert!(!nearby.connect(99));
        assert_eq!(counter.get(), 1);
        assert_eq!(
            notifier.received()[0].description,
            "You sent a connection request to Michael Richards"
        );
    }

    #[test]
    fn test_change_location() {
        let notifier = RecordingNotifier::new();
        let mut nearby = NearbySession::new(
            vec![],
            Arc::new(notifier.clone()),
            ConnectionCounter::new(),
        );
        assert_eq!(nearby.location(), DEFAULT_LOCATION);
        nearby.change_location("New York, NY");
        assert_eq!(nearby.location(), "New York, NY");
        assert_eq!(notifier.titles(), vec!["Location Changed"]);
    }

    #[test]
    fn test_repeat_request_is_ignored() {
        let notifier = RecordingNotifier::new();
        let counter = ConnectionCounter::new();
        let mut nearby = NearbySession::new(
            Catalog::seed().nearby().to_vec(),
            Arc::new(notifier.clone()),
            counter.clone(),
        );

        assert!(!nearby.is_pending(1));
        assert!(nearby.connect(1));
        assert!(nearby.is_pending(1));
        assert!(!nearby.connect(1));
        assert!(!nearby.connect(1));

        assert_eq!(counter.get(), 1);
        assert_eq!(notifier.received().len(), 1);
        assert!(!nearby.is_pending(2));
    }

    #[test]
    fn test_expand_search() {
        let notifier = RecordingNotifier::new();
        let nearby = NearbySession::new(
            vec![],
            Arc::new(notifier.clone()),
            ConnectionCounter::new(),
        );
        nearby.expand_search();
        let received = notifier.received();
        assert_eq!(received[0].title, "Map Expanded");
        assert_eq!(
            received[0].description,
            "Showing all professionals in a 10 mile radius"
        );
    }
}
