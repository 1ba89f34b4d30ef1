//! Tuning knobs for the swipe gesture.

use std::time::Duration;
use thiserror::Error;

/// Rejected gesture configurations
#[derive(Error, Debug, PartialEq)]
pub enum SwipeConfigError {
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    /// The deck must advance before the card is released for new drags
    #[error("reset delay ({reset:?}) must be longer than advance delay ({advance:?})")]
    DelayOrder { advance: Duration, reset: Duration },
}

/// Thresholds, windows and delays for swipe interpretation.
///
/// Defaults reproduce the stock interaction: commit at 100 units, rotate up
/// to 30 degrees across a 300 unit window, tint across 150 units, advance
/// the deck after 200ms and release the card after 500ms.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeConfig {
    /// Minimum release magnitude that commits a decision
    pub commit_threshold: f64,
    /// Offset magnitude at which rotation maxes out and opacity reaches zero
    pub normalization_window: f64,
    pub max_rotation_deg: f64,
    /// Offset magnitude at which the background tint is fully directional
    pub tint_window: f64,
    /// Exit offset magnitude for a committed card
    pub viewport_width: f64,
    /// Delay between commit and the deck transition
    pub advance_delay: Duration,
    /// Delay between commit and the card accepting drags again
    pub reset_delay: Duration,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            commit_threshold: 100.0,
            normalization_window: 300.0,
            max_rotation_deg: 30.0,
            tint_window: 150.0,
            viewport_width: 1000.0,
            advance_delay: Duration::from_millis(200),
            reset_delay: Duration::from_millis(500),
        }
    }
}

impl SwipeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the commit threshold (default: 100)
    pub fn with_commit_threshold(mut self, threshold: f64) -> Self {
        self.commit_threshold = threshold;
        self
    }

    /// Configure the exit offset magnitude (default: 1000)
    pub fn with_viewport_width(mut self, width: f64) -> Self {
        self.viewport_width = width;
        self
    }

    /// Configure both settle delays (defaults: 200ms and 500ms)
    pub fn with_delays(mut self, advance: Duration, reset: Duration) -> Self {
        self.advance_delay = advance;
        self.reset_delay = reset;
        self
    }

    /// Check that every magnitude is positive and the delays are ordered.
    pub fn validate(&self) -> Result<(), SwipeConfigError> {
        for (field, value) in [
            ("commit_threshold", self.commit_threshold),
            ("normalization_window", self.normalization_window),
            ("max_rotation_deg", self.max_rotation_deg),
            ("tint_window", self.tint_window),
            ("viewport_width", self.viewport_width),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SwipeConfigError::NotPositive { field, value });
            }
        }
        if self.reset_delay <= self.advance_delay {
            return Err(SwipeConfigError::DelayOrder {
                advance: self.advance_delay,
                reset: self.reset_delay,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        SwipeConfig::default().validate().unwrap();
    }

    #[test]
    fn test_reset_must_follow_advance() {
        let config = SwipeConfig::new()
            .with_delays(Duration::from_millis(500), Duration::from_millis(200));
        assert!(matches!(
            config.validate(),
            Err(SwipeConfigError::DelayOrder { .. })
        ));
    }

    #[test]
    fn test_threshold_must_be_positive() {
        let config = SwipeConfig::new().with_commit_threshold(0.0);
        assert_eq!(
            config.validate(),
            Err(SwipeConfigError::NotPositive {
                field: "commit_threshold",
                value: 0.0
            })
        );
    }
}
