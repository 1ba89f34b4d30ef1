//! # Deck Crate
//!
//! The swipeable profile deck of the network tab.
//!
//! ## Components
//!
//! ### Deck Controller
//! Owns the ordered profile sequence and the cursor:
//! - `skip` / `connect` move past the top profile (connect also bumps the
//!   shared connection counter)
//! - `reset` starts over
//! - `peek(2)` yields the active card and the one underneath it
//!
//! ### Swipe Gesture Interpreter
//! Translates a horizontal drag into Skip / Connect / Cancel with a commit
//! threshold, and guards the deck with a settle period so a single gesture
//! advances it at most once.
//!
//! ## Example Usage
//!
//! ```ignore
//! use deck::{DeckController, SwipeGesture, SwipeDecision};
//!
//! let mut gesture = SwipeGesture::default();
//! gesture.drag_to(-150.0);
//! gesture.release();
//! // ... after the advance delay
//! match gesture.take_pending() {
//!     Some(SwipeDecision::Skip) => { deck.skip(); }
//!     Some(SwipeDecision::Connect) => { deck.connect(); }
//!     _ => {}
//! }
//! // ... after the reset delay
//! gesture.settle();
//! ```

pub mod config;
pub mod deck;
pub mod gesture;

pub use config::{SwipeConfig, SwipeConfigError};
pub use deck::{DeckController, DeckState};
pub use gesture::{
    decide, visual, CardVisual, Direction, ReleaseOutcome, Rgba, SwipeDecision, SwipeGesture,
};
