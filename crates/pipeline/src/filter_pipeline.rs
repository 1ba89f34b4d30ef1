//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! category filters together using the builder pattern.

use crate::filter_state::FilterState;
use crate::filters::{JobTypeFilter, RoleFilter, SkillFilter};
use crate::traits::Filter;
use catalog::Job;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(RoleFilter)
///     .add_filter(SkillFilter)
///     .add_filter(JobTypeFilter);
///
/// let visible = pipeline.apply(&jobs, &state);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Roles, then skills, then job type: the three categories ANDed.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(RoleFilter)
            .add_filter(SkillFilter)
            .add_filter(JobTypeFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the listings.
    ///
    /// ## Algorithm
    /// 1. Start with every listing, in input order
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return the survivors, still in input order
    pub fn apply<'a>(&self, jobs: &'a [Job], state: &FilterState) -> Vec<&'a Job> {
        let mut current: Vec<&Job> = jobs.iter().collect();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, state);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
