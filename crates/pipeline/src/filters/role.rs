//! Filter on the job title.

use super::contains_ignore_case;
use crate::filter_state::FilterState;
use crate::traits::Filter;
use catalog::Job;

/// Keeps listings whose title contains at least one active role token.
///
/// ## Algorithm
/// Case-insensitive substring match of each role token against the title.
/// No active roles keeps every listing.
pub struct RoleFilter;

impl Filter for RoleFilter {
    fn name(&self) -> &str {
        "RoleFilter"
    }

    fn apply<'a>(&self, jobs: Vec<&'a Job>, state: &FilterState) -> Vec<&'a Job> {
        if state.roles.is_empty() {
            return jobs;
        }
        jobs.into_iter()
            .filter(|job| {
                state
                    .roles
                    .iter()
                    .any(|role| contains_ignore_case(&job.title, role))
            })
            .collect()
    }
}
