//! Deck Controller - which profile is on top
//!
//! Owns the ordered profile sequence and a cursor into it. The only
//! transitions are:
//! - `Active(i) --skip/connect--> Active(i + 1)` while `i + 1 < len`
//! - `Active(len - 1) --skip/connect--> Exhausted`
//! - `any --reset--> Active(0)` (or `Exhausted` again for an empty deck)
//!
//! `show_detail` is a read and never moves the cursor.

use catalog::{ConnectionCounter, Notification, Notifier, Profile, ProfileId, ProfilePresenter};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Observable state of the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckState {
    /// Cursor points at a profile
    Active(usize),
    /// Cursor has moved past the last profile
    Exhausted,
}

/// Tracks the profile on top of the deck and emits the side effects of
/// each decision.
pub struct DeckController {
    sequence: Vec<Profile>,
    /// Invariant: `cursor <= sequence.len()`
    cursor: usize,
    notifier: Arc<dyn Notifier>,
    presenter: Arc<dyn ProfilePresenter>,
    connections: ConnectionCounter,
}

impl DeckController {
    /// Create a deck over `sequence`; display order is the order given.
    pub fn new(
        sequence: Vec<Profile>,
        notifier: Arc<dyn Notifier>,
        presenter: Arc<dyn ProfilePresenter>,
        connections: ConnectionCounter,
    ) -> Self {
        debug!("Mounting deck with {} profiles", sequence.len());
        Self {
            sequence,
            cursor: 0,
            notifier,
            presenter,
            connections,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.sequence.len()
    }

    pub fn state(&self) -> DeckState {
        if self.is_exhausted() {
            DeckState::Exhausted
        } else {
            DeckState::Active(self.cursor)
        }
    }

    /// The profile on top, if any
    pub fn current(&self) -> Option<&Profile> {
        self.sequence.get(self.cursor)
    }

    /// Profiles at `[cursor, cursor + depth)`, clipped to the sequence.
    ///
    /// The first entry is the interactive card; the rest sit underneath.
    pub fn peek(&self, depth: usize) -> &[Profile] {
        let start = self.cursor.min(self.sequence.len());
        let end = self.cursor.saturating_add(depth).min(self.sequence.len());
        &self.sequence[start..end]
    }

    /// Profiles not yet decided on
    pub fn remaining(&self) -> usize {
        self.sequence.len() - self.cursor
    }

    /// Profile view counter shown in the stats bar
    pub fn profile_views(&self) -> usize {
        self.cursor * 4 + 12
    }

    /// Total connections made through the shared counter
    pub fn connections(&self) -> u64 {
        self.connections.get()
    }

    /// Move past the top profile without connecting.
    ///
    /// Returns the skipped profile's id, or `None` (and does nothing) when
    /// the deck is exhausted.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn skip(&mut self) -> Option<ProfileId> {
        let (id, name) = self.top()?;
        self.advance();
        self.notifier.notify(Notification::skipped(&name));
        info!("Skipped profile {}", id);
        Some(id)
    }

    /// Connect with the top profile and move past it.
    ///
    /// Also bumps the shared connection counter. No-op when exhausted.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn connect(&mut self) -> Option<ProfileId> {
        let (id, name) = self.top()?;
        self.advance();
        let total = self.connections.increment();
        self.notifier.notify(Notification::connected(&name));
        info!("Connected with profile {} (total connections: {})", id, total);
        Some(id)
    }

    /// Ask the presenter to show the top profile. Returns false when exhausted.
    pub fn show_detail(&self) -> bool {
        match self.current() {
            Some(profile) => {
                debug!("Showing detail for profile {}", profile.id);
                self.presenter.show_profile(profile.id);
                true
            }
            None => false,
        }
    }

    /// Start over from the first profile.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.notifier.notify(Notification::deck_reset());
        info!("Deck reset ({} profiles)", self.sequence.len());
    }

    fn top(&self) -> Option<(ProfileId, String)> {
        match self.current() {
            Some(profile) => Some((profile.id, profile.full_name.clone())),
            None => {
                debug!("Deck exhausted, ignoring decision");
                None
            }
        }
    }

    fn advance(&mut self) {
        self.cursor += 1;
        if self.is_exhausted() {
            info!("Deck exhausted after {} profiles", self.sequence.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Catalog, RecordingNotifier, RecordingPresenter, Severity};

    fn build_deck(profiles: Vec<Profile>) -> (DeckController, RecordingNotifier, RecordingPresenter) {
        let notifier = RecordingNotifier::new();
        let presenter = RecordingPresenter::new();
        let deck = DeckController::new(
            profiles,
            Arc::new(notifier.clone()),
            Arc::new(presenter.clone()),
            ConnectionCounter::new(),
        );
        (deck, notifier, presenter)
    }

    fn seed_profiles(n: usize) -> Vec<Profile> {
        Catalog::seed().profiles().iter().take(n).cloned().collect()
    }

    #[test]
    fn test_new_deck_starts_active_at_zero() {
        let (deck, _, _) = build_deck(seed_profiles(3));
        assert_eq!(deck.state(), DeckState::Active(0));
        assert_eq!(deck.current().unwrap().full_name, "Sarah Johnson");
        assert_eq!(deck.remaining(), 3);
    }

    #[test]
    fn test_empty_deck_is_exhausted_immediately() {
        let (mut deck, notifier, _) = build_deck(vec![]);
        assert_eq!(deck.state(), DeckState::Exhausted);
        assert!(deck.peek(2).is_empty());
        assert_eq!(deck.skip(), None);
        assert!(notifier.received().is_empty());

        deck.reset();
        assert_eq!(deck.state(), DeckState::Exhausted);
    }

    #[test]
    fn test_skip_advances_and_notifies_previous_top() {
        let (mut deck, notifier, _) = build_deck(seed_profiles(3));
        assert_eq!(deck.skip(), Some(1));
        assert_eq!(deck.cursor(), 1);

        let received = notifier.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].description, "You skipped Sarah Johnson");
        assert_eq!(received[0].severity, Severity::Destructive);
        assert_eq!(deck.connections(), 0);
    }

    #[test]
    fn test_connect_increments_counter() {
        let (mut deck, notifier, _) = build_deck(seed_profiles(3));
        assert_eq!(deck.connect(), Some(1));
        assert_eq!(deck.connect(), Some(2));
        assert_eq!(deck.connections(), 2);
        assert_eq!(notifier.titles(), vec!["Connected!", "Connected!"]);
    }

    #[test]
    fn test_decisions_on_exhausted_deck_are_noops() {
        let (mut deck, notifier, _) = build_deck(seed_profiles(1));
        deck.connect();
        assert!(deck.is_exhausted());

        assert_eq!(deck.skip(), None);
        assert_eq!(deck.connect(), None);
        assert_eq!(deck.cursor(), 1);
        assert_eq!(deck.connections(), 1);
        assert_eq!(notifier.received().len(), 1);
    }

    #[test]
    fn test_peek_clips_to_sequence() {
        let (mut deck, _, _) = build_deck(seed_profiles(3));
        let ids: Vec<_> = deck.peek(2).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);

        deck.skip();
        deck.skip();
        let ids: Vec<_> = deck.peek(2).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3]);

        deck.skip();
        assert!(deck.peek(2).is_empty());
    }

    #[test]
    fn test_show_detail_reads_without_moving() {
        let (mut deck, _, presenter) = build_deck(seed_profiles(2));
        assert!(deck.show_detail());
        assert_eq!(deck.cursor(), 0);
        deck.skip();
        deck.skip();
        assert!(!deck.show_detail());
        assert_eq!(presenter.shown(), vec![1]);
    }

    #[test]
    fn test_reset_returns_to_start() {
        let (mut deck, notifier, _) = build_deck(seed_profiles(2));
        deck.skip();
        deck.connect();
        assert_eq!(deck.state(), DeckState::Exhausted);

        deck.reset();
        assert_eq!(deck.state(), DeckState::Active(0));
        assert_eq!(notifier.titles().last().unwrap(), "Cards Reset");
        // Connections survive a reset
        assert_eq!(deck.connections(), 1);
    }

    #[test]
    fn test_stats_follow_cursor() {
        let (mut deck, _, _) = build_deck(seed_profiles(7));
        assert_eq!(deck.profile_views(), 12);
        deck.skip();
        deck.skip();
        assert_eq!(deck.profile_views(), 20);
        assert_eq!(deck.remaining(), 5);
    }
}
