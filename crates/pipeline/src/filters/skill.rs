//! Filter on listing skills.

use super::contains_ignore_case;
use crate::filter_state::FilterState;
use crate::traits::Filter;
use catalog::Job;

/// Keeps listings with at least one skill containing an active skill token.
pub struct SkillFilter;

impl Filter for SkillFilter {
    fn name(&self) -> &str {
        "SkillFilter"
    }

    fn apply<'a>(&self, jobs: Vec<&'a Job>, state: &FilterState) -> Vec<&'a Job> {
        if state.skills.is_empty() {
            return jobs;
        }
        jobs.into_iter()
            .filter(|job| {
                state.skills.iter().any(|token| {
                    job.skills
                        .iter()
                        .any(|skill| contains_ignore_case(skill, token))
                })
            })
            .collect()
    }
}
