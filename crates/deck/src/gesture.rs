//! Swipe Gesture Interpreter
//!
//! Turns a continuous horizontal drag into a discrete decision in two
//! phases:
//! 1. `decide` maps a release offset to Skip, Connect or Cancel. Pure.
//! 2. A committed release parks the card in the settling state. The host
//!    takes the pending decision exactly once after `advance_delay`, then
//!    calls `settle` after `reset_delay` to hand the next card a fresh
//!    gesture.
//!
//! While settling every drag and release is ignored, so one physical
//! gesture can advance the deck at most once.

use crate::config::SwipeConfig;
use tracing::{debug, trace};

/// Side a card leaves through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// What a release means for the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDecision {
    Skip,
    Connect,
    /// Below threshold: the card springs back, nothing happens
    Cancel,
}

impl SwipeDecision {
    pub fn direction(self) -> Option<Direction> {
        match self {
            SwipeDecision::Skip => Some(Direction::Left),
            SwipeDecision::Connect => Some(Direction::Right),
            SwipeDecision::Cancel => None,
        }
    }
}

/// Map a release offset to a decision.
///
/// Magnitudes strictly greater than `threshold` commit; everything else
/// cancels.
pub fn decide(offset: f64, threshold: f64) -> SwipeDecision {
    if offset < -threshold {
        SwipeDecision::Skip
    } else if offset > threshold {
        SwipeDecision::Connect
    } else {
        SwipeDecision::Cancel
    }
}

/// Result of a release event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseOutcome {
    /// The card is settling from an earlier commit; event dropped
    Ignored,
    /// Below threshold; the card returns to offset 0
    Returned,
    /// The card flies out to `exit_offset` and the deck will advance
    Committed {
        decision: SwipeDecision,
        exit_offset: f64,
    },
}

/// RGBA colour, alpha in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    fn lerp(self, to: Rgba, t: f64) -> Rgba {
        let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgba {
            r: channel(self.r, to.r),
            g: channel(self.g, to.g),
            b: channel(self.b, to.b),
            a: self.a + (to.a - self.a) * t,
        }
    }
}

pub const NEUTRAL_TINT: Rgba = Rgba::new(255, 255, 255, 0.0);
pub const SKIP_TINT: Rgba = Rgba::new(239, 68, 68, 0.2);
pub const CONNECT_TINT: Rgba = Rgba::new(34, 197, 94, 0.2);

/// Everything the renderer needs to draw the dragged card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisual {
    pub offset: f64,
    pub rotation_deg: f64,
    pub opacity: f64,
    pub skip_indicator: f64,
    pub connect_indicator: f64,
    pub tint: Rgba,
}

/// Visual mapping for a card at `offset`. Not state-affecting.
pub fn visual(offset: f64, config: &SwipeConfig) -> CardVisual {
    let normalized = (offset / config.normalization_window).clamp(-1.0, 1.0);
    let indicator_full = config.commit_threshold / 2.0;
    let tint_t = (offset / config.tint_window).clamp(-1.0, 1.0);
    let tint = if tint_t < 0.0 {
        NEUTRAL_TINT.lerp(SKIP_TINT, -tint_t)
    } else {
        NEUTRAL_TINT.lerp(CONNECT_TINT, tint_t)
    };

    CardVisual {
        offset,
        rotation_deg: normalized * config.max_rotation_deg,
        opacity: 1.0 - normalized.abs(),
        skip_indicator: (-offset / indicator_full).clamp(0.0, 1.0),
        connect_indicator: (offset / indicator_full).clamp(0.0, 1.0),
        tint,
    }
}

/// One card's drag state, reused across drags until the card leaves.
#[derive(Debug, Clone)]
pub struct SwipeGesture {
    config: SwipeConfig,
    offset: f64,
    committed: Option<Direction>,
    settling: bool,
    /// Deck transition waiting for the advance delay; taken exactly once
    pending: Option<SwipeDecision>,
}

impl SwipeGesture {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            offset: 0.0,
            committed: None,
            settling: false,
            pending: None,
        }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn committed_direction(&self) -> Option<Direction> {
        self.committed
    }

    pub fn is_settling(&self) -> bool {
        self.settling
    }

    pub fn visual(&self) -> CardVisual {
        visual(self.offset, &self.config)
    }

    /// Track the live drag position. Returns false if ignored while settling.
    pub fn drag_to(&mut self, offset: f64) -> bool {
        if self.settling {
            trace!("Ignoring drag to {} while settling", offset);
            return false;
        }
        self.offset = offset;
        true
    }

    /// Release at the current offset.
    pub fn release(&mut self) -> ReleaseOutcome {
        self.release_at(self.offset)
    }

    /// Release at `offset` (the drag's net displacement).
    pub fn release_at(&mut self, offset: f64) -> ReleaseOutcome {
        if self.settling {
            debug!("Release at {} ignored: card is settling", offset);
            return ReleaseOutcome::Ignored;
        }

        let decision = decide(offset, self.config.commit_threshold);
        match decision.direction() {
            None => {
                debug!("Release at {} below threshold, returning card", offset);
                self.offset = 0.0;
                ReleaseOutcome::Returned
            }
            Some(direction) => {
                let exit_offset = direction.sign() * self.config.viewport_width;
                debug!("Release at {} committed {:?}", offset, decision);
                self.committed = Some(direction);
                self.settling = true;
                self.pending = Some(decision);
                self.offset = exit_offset;
                ReleaseOutcome::Committed {
                    decision,
                    exit_offset,
                }
            }
        }
    }

    /// Commit a decision without a drag (the Skip/Connect buttons).
    ///
    /// Follows the same settle path as a committed release.
    pub fn commit(&mut self, decision: SwipeDecision) -> ReleaseOutcome {
        match decision {
            SwipeDecision::Skip => self.release_at(-f64::INFINITY),
            SwipeDecision::Connect => self.release_at(f64::INFINITY),
            SwipeDecision::Cancel => self.release_at(0.0),
        }
    }

    /// Hand over the committed decision for the deck transition.
    ///
    /// Yields `Some` at most once per commit.
    pub fn take_pending(&mut self) -> Option<SwipeDecision> {
        self.pending.take()
    }

    /// End the settle period: offset back to 0, drags accepted again.
    pub fn settle(&mut self) {
        self.offset = 0.0;
        self.committed = None;
        self.settling = false;
        self.pending = None;
    }
}

impl Default for SwipeGesture {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decide_thresholds() {
        assert_eq!(decide(-150.0, 100.0), SwipeDecision::Skip);
        assert_eq!(decide(150.0, 100.0), SwipeDecision::Connect);
        assert_eq!(decide(50.0, 100.0), SwipeDecision::Cancel);
        assert_eq!(decide(-50.0, 100.0), SwipeDecision::Cancel);
        // Exactly at the threshold does not commit
        assert_eq!(decide(100.0, 100.0), SwipeDecision::Cancel);
        assert_eq!(decide(-100.0, 100.0), SwipeDecision::Cancel);
    }

    #[test]
    fn test_release_below_threshold_returns_to_zero() {
        let mut gesture = SwipeGesture::default();
        assert!(gesture.drag_to(50.0));
        assert_eq!(gesture.release(), ReleaseOutcome::Returned);
        assert_eq!(gesture.offset(), 0.0);
        assert!(!gesture.is_settling());
        assert_eq!(gesture.take_pending(), None);
    }

    #[test]
    fn test_committed_release_exits_off_screen() {
        let mut gesture = SwipeGesture::default();
        gesture.drag_to(-150.0);
        assert_eq!(
            gesture.release(),
            ReleaseOutcome::Committed {
                decision: SwipeDecision::Skip,
                exit_offset: -1000.0
            }
        );
        assert_eq!(gesture.committed_direction(), Some(Direction::Left));
        assert!(gesture.is_settling());
    }

    #[test]
    fn test_settling_ignores_drags_and_releases() {
        let mut gesture = SwipeGesture::default();
        gesture.release_at(150.0);

        assert!(!gesture.drag_to(-400.0));
        assert_eq!(gesture.release_at(-400.0), ReleaseOutcome::Ignored);
        assert_eq!(gesture.committed_direction(), Some(Direction::Right));
    }

    #[test]
    fn test_pending_decision_is_taken_once() {
        let mut gesture = SwipeGesture::default();
        gesture.release_at(150.0);
        gesture.release_at(150.0);

        assert_eq!(gesture.take_pending(), Some(SwipeDecision::Connect));
        assert_eq!(gesture.take_pending(), None);
    }

    #[test]
    fn test_settle_reopens_the_card() {
        let mut gesture = SwipeGesture::default();
        gesture.release_at(-150.0);
        gesture.settle();

        assert_eq!(gesture.offset(), 0.0);
        assert!(!gesture.is_settling());
        assert_eq!(gesture.committed_direction(), None);
        assert!(gesture.drag_to(20.0));
    }

    #[test]
    fn test_button_commit_uses_settle_path() {
        let mut gesture = SwipeGesture::default();
        let outcome = gesture.commit(SwipeDecision::Connect);
        assert!(matches!(
            outcome,
            ReleaseOutcome::Committed {
                decision: SwipeDecision::Connect,
                ..
            }
        ));
        assert!(gesture.is_settling());
    }

    #[test]
    fn test_visual_at_rest() {
        let v = visual(0.0, &SwipeConfig::default());
        assert_eq!(v.rotation_deg, 0.0);
        assert_eq!(v.opacity, 1.0);
        assert_eq!(v.skip_indicator, 0.0);
        assert_eq!(v.connect_indicator, 0.0);
        assert_eq!(v.tint, NEUTRAL_TINT);
    }

    #[test]
    fn test_visual_rotation_and_opacity_window() {
        let config = SwipeConfig::default();
        let v = visual(150.0, &config);
        assert!((v.rotation_deg - 15.0).abs() < 1e-9);
        assert!((v.opacity - 0.5).abs() < 1e-9);

        // Clamped past the window
        let v = visual(-900.0, &config);
        assert!((v.rotation_deg + 30.0).abs() < 1e-9);
        assert_eq!(v.opacity, 0.0);
    }

    #[test]
    fn test_indicators_full_at_half_threshold() {
        let config = SwipeConfig::default();
        assert!((visual(25.0, &config).connect_indicator - 0.5).abs() < 1e-9);
        assert_eq!(visual(50.0, &config).connect_indicator, 1.0);
        assert_eq!(visual(50.0, &config).skip_indicator, 0.0);
        assert_eq!(visual(-80.0, &config).skip_indicator, 1.0);
    }

    #[test]
    fn test_tint_reaches_direction_colour_at_window() {
        let config = SwipeConfig::default();
        assert_eq!(visual(-150.0, &config).tint, SKIP_TINT);
        assert_eq!(visual(300.0, &config).tint, CONNECT_TINT);

        let halfway = visual(75.0, &config).tint;
        assert!((halfway.a - 0.1).abs() < 1e-9);
    }
}
