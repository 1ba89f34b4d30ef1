//! # Network Session
//!
//! Hosts the deck and the swipe gesture for the network tab and runs the
//! settle protocol on tokio timers:
//! 1. A committed release parks the card (settling)
//! 2. After `advance_delay` the pending decision is applied to the deck,
//!    exactly once
//! 3. After `reset_delay` the card offset returns to 0 and drags are
//!    accepted again
//!
//! Timers hold only a weak reference to the session state and are aborted
//! on teardown, so a dropped session is never mutated. Each timer also
//! carries the generation it was scheduled in; `reset` bumps the
//! generation, so a timer that woke before it could be aborted does nothing.

use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use catalog::{ConnectionCounter, Notifier, Profile, ProfileId, ProfilePresenter};
use deck::{
    CardVisual, DeckController, DeckState, ReleaseOutcome, SwipeConfig, SwipeDecision,
    SwipeGesture,
};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Cards rendered at once: the active one and the one beneath it
pub const VISIBLE_CARDS: usize = 2;

/// What the network tab shows at a point in time
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkSnapshot {
    pub state: DeckState,
    pub cursor: usize,
    pub remaining: usize,
    pub profile_views: usize,
    pub connections: u64,
    /// Ids of the rendered cards, top first
    pub cards: Vec<ProfileId>,
    pub settling: bool,
    pub visual: CardVisual,
}

struct NetworkState {
    deck: DeckController,
    gesture: SwipeGesture,
    /// Bumped on every reset
    generation: u64,
}

fn lock(state: &Mutex<NetworkState>) -> MutexGuard<'_, NetworkState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Owns the one deck of the network tab. Must be used inside a tokio runtime.
pub struct NetworkSession {
    state: Arc<Mutex<NetworkState>>,
    timers: Mutex<Vec<JoinHandle<()>>>,
    config: SwipeConfig,
}

impl NetworkSession {
    pub fn new(
        profiles: Vec<Profile>,
        config: SwipeConfig,
        notifier: Arc<dyn Notifier>,
        presenter: Arc<dyn ProfilePresenter>,
        connections: ConnectionCounter,
    ) -> Self {
        let deck = DeckController::new(profiles, notifier, presenter, connections);
        let gesture = SwipeGesture::new(config.clone());
        Self {
            state: Arc::new(Mutex::new(NetworkState {
                deck,
                gesture,
                generation: 0,
            })),
            timers: Mutex::new(Vec::new()),
            config,
        }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Live drag update. Ignored while the card is settling or the deck is
    /// exhausted.
    pub fn drag(&self, offset: f64) -> bool {
        let mut state = lock(&self.state);
        if state.deck.is_exhausted() {
            return false;
        }
        state.gesture.drag_to(offset)
    }

    /// Release the drag at `offset`.
    pub fn release(&self, offset: f64) -> ReleaseOutcome {
        let (outcome, generation) = {
            let mut state = lock(&self.state);
            if state.deck.is_exhausted() {
                debug!("Release ignored: deck exhausted");
                return ReleaseOutcome::Ignored;
            }
            (state.gesture.release_at(offset), state.generation)
        };
        self.schedule_if_committed(outcome, generation);
        outcome
    }

    /// The Skip / Connect buttons: same exit animation and settle guard as
    /// a committed swipe.
    pub fn press(&self, decision: SwipeDecision) -> ReleaseOutcome {
        let (outcome, generation) = {
            let mut state = lock(&self.state);
            if state.deck.is_exhausted() {
                return ReleaseOutcome::Ignored;
            }
            (state.gesture.commit(decision), state.generation)
        };
        self.schedule_if_committed(outcome, generation);
        outcome
    }

    /// The Profile button. Returns false when there is no card on top.
    pub fn show_detail(&self) -> bool {
        lock(&self.state).deck.show_detail()
    }

    /// Start the deck over. Pending timers are cancelled.
    pub fn reset(&self) {
        self.cancel_timers();
        let mut state = lock(&self.state);
        state.generation += 1;
        state.gesture.settle();
        state.deck.reset();
    }

    pub fn snapshot(&self) -> NetworkSnapshot {
        let state = lock(&self.state);
        NetworkSnapshot {
            state: state.deck.state(),
            cursor: state.deck.cursor(),
            remaining: state.deck.remaining(),
            profile_views: state.deck.profile_views(),
            connections: state.deck.connections(),
            cards: state
                .deck
                .peek(VISIBLE_CARDS)
                .iter()
                .map(|p| p.id)
                .collect(),
            settling: state.gesture.is_settling(),
            visual: state.gesture.visual(),
        }
    }

    /// The profile on top, cloned out of the session
    pub fn current(&self) -> Option<Profile> {
        lock(&self.state).deck.current().cloned()
    }

    /// Wait for every scheduled timer to finish.
    pub async fn wait_idle(&self) {
        let handles: Vec<_> = self
            .timers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .drain(..)
            .collect();
        for handle in handles {
            if let Err(err) = handle.await {
                if !err.is_cancelled() {
                    warn!("Settle timer failed: {}", err);
                }
            }
        }
    }

    /// Cancel pending timers; the session stays usable.
    pub fn shutdown(&self) {
        self.cancel_timers();
    }

    fn schedule_if_committed(&self, outcome: ReleaseOutcome, generation: u64) {
        if let ReleaseOutcome::Committed { decision, .. } = outcome {
            info!("Committed {:?}, settling", decision);
            let advance = spawn_after(
                self.config.advance_delay,
                Arc::downgrade(&self.state),
                generation,
                apply_pending,
            );
            let settle = spawn_after(
                self.config.reset_delay,
                Arc::downgrade(&self.state),
                generation,
                |state| state.gesture.settle(),
            );
            let mut timers = self
                .timers
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            timers.retain(|handle| !handle.is_finished());
            timers.push(advance);
            timers.push(settle);
        }
    }

    fn cancel_timers(&self) {
        let mut timers = self
            .timers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        for handle in timers.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for NetworkSession {
    fn drop(&mut self) {
        self.cancel_timers();
    }
}

/// One-shot deferred callback against the session state. Skipped when the
/// session is gone or was reset after `generation`.
fn spawn_after(
    delay: Duration,
    state: Weak<Mutex<NetworkState>>,
    generation: u64,
    action: impl FnOnce(&mut NetworkState) + Send + 'static,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        match state.upgrade() {
            Some(state) => {
                let mut guard = lock(&state);
                if guard.generation == generation {
                    action(&mut *guard);
                } else {
                    debug!(
                        "Stale timer from generation {} (now {})",
                        generation, guard.generation
                    );
                }
            }
            None => debug!("Session gone before timer fired"),
        }
    })
}

fn apply_pending(state: &mut NetworkState) {
    match state.gesture.take_pending() {
        Some(SwipeDecision::Skip) => {
            state.deck.skip();
        }
        Some(SwipeDecision::Connect) => {
            state.deck.connect();
        }
        Some(SwipeDecision::Cancel) | None => {}
    }
}
