//! Filter on employment type, with the remote special case.

use crate::filter_state::FilterState;
use crate::traits::Filter;
use catalog::Job;

/// Token that also matches any listing flagged as remote
pub const REMOTE: &str = "Remote";

/// Keeps listings whose type exactly equals an active job-type token, or
/// that are remote while "Remote" is active.
pub struct JobTypeFilter;

impl Filter for JobTypeFilter {
    fn name(&self) -> &str {
        "JobTypeFilter"
    }

    fn apply<'a>(&self, jobs: Vec<&'a Job>, state: &FilterState) -> Vec<&'a Job> {
        if state.job_types.is_empty() {
            return jobs;
        }
        let remote_active = state.job_types.contains(REMOTE);
        jobs.into_iter()
            .filter(|job| {
                state.job_types.contains(&job.job_type) || (remote_active && job.is_remote)
            })
            .collect()
    }
}
