//! Core traits for the job filter pipeline.
//!
//! This module defines the Filter trait that lets each filter category be
//! composed into a FilterPipeline.

use crate::filter_state::FilterState;
use catalog::Job;

/// Core trait for filtering job listings.
///
/// ## Design Note
/// - `Send + Sync` allows a pipeline to be shared between sessions
/// - Filters take the current subset by value and return the kept
///   references in their original order (stable, no re-sorting)
/// - A filter whose category has no active tokens keeps everything
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of listings.
    ///
    /// # Arguments
    /// * `jobs` - The listings still visible
    /// * `state` - Active filter tokens
    fn apply<'a>(&self, jobs: Vec<&'a Job>, state: &FilterState) -> Vec<&'a Job>;
}
