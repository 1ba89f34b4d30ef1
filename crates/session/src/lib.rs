//! Session crate for the glassnet demo.
//!
//! Hosts the interactive core the way a view layer would: the network tab
//! drives the deck from swipe gestures on tokio timers, the jobs tab owns
//! a job board, the feed and nearby tabs keep their small bits of state,
//! and the insights tab reads the shared connection counter. The theme
//! preference store lives here too.

pub mod app;
pub mod feed;
pub mod insights;
pub mod nearby;
pub mod network;
pub mod preferences;

pub use app::{App, Collaborators, DEFAULT_FEED_SEED};
pub use feed::{FeedEntry, FeedSession, REACTIONS};
pub use insights::{Headline, InsightsSession, Metric, MetricView};
pub use nearby::NearbySession;
pub use network::{NetworkSession, NetworkSnapshot};
pub use preferences::{PreferenceError, Theme, ThemeStore};
