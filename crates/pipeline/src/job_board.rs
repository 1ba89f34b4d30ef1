//! The job board: listings, active filters and the visible subset.
//!
//! Every toggle recomputes the visible subset from scratch; the data set is
//! small and in memory, so there is nothing to cache.

use crate::filter_pipeline::FilterPipeline;
use crate::filter_state::{Category, FilterState};
use catalog::{Job, JobId, Notification, Notifier};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Owns the filter state for a read-only listing collection.
pub struct JobBoard {
    jobs: Vec<Job>,
    state: FilterState,
    pipeline: FilterPipeline,
    /// Listings passing the filters, in input order
    visible: Vec<Job>,
    applied: BTreeSet<JobId>,
    notifier: Arc<dyn Notifier>,
}

impl JobBoard {
    pub fn new(jobs: Vec<Job>, notifier: Arc<dyn Notifier>) -> Self {
        let visible = jobs.clone();
        Self {
            jobs,
            state: FilterState::new(),
            pipeline: FilterPipeline::standard(),
            visible,
            applied: BTreeSet::new(),
            notifier,
        }
    }

    /// Every listing, unfiltered
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// True when at least one category has an active token
    pub fn is_filtering(&self) -> bool {
        !self.state.is_empty()
    }

    /// Listings passing the active filters, in input order
    pub fn visible(&self) -> &[Job] {
        &self.visible
    }

    /// Toggle one token and recompute. Adding a token notifies; removing
    /// one does not. Returns true when the token was added.
    #[instrument(skip(self))]
    pub fn toggle(&mut self, category: Category, token: &str) -> bool {
        let added = self.state.toggle(category, token);
        if added {
            self.notifier.notify(Notification::filter_added(token));
        }
        debug!(
            "{} {} filter '{}'",
            if added { "Added" } else { "Removed" },
            category,
            token
        );
        self.recompute();
        added
    }

    pub fn toggle_role(&mut self, role: &str) -> bool {
        self.toggle(Category::Role, role)
    }

    pub fn toggle_skill(&mut self, skill: &str) -> bool {
        self.toggle(Category::Skill, skill)
    }

    pub fn toggle_job_type(&mut self, job_type: &str) -> bool {
        self.toggle(Category::JobType, job_type)
    }

    /// Clear every category; all listings become visible.
    pub fn reset(&mut self) {
        self.state.reset();
        self.recompute();
        self.notifier.notify(Notification::filters_reset());
    }

    pub fn has_applied(&self, job_id: JobId) -> bool {
        self.applied.contains(&job_id)
    }

    /// Apply for a listing.
    ///
    /// Returns false for an unknown id or a listing already applied for;
    /// neither notifies.
    pub fn apply(&mut self, job_id: JobId) -> bool {
        match self.jobs.iter().find(|job| job.id == job_id) {
            Some(job) if self.applied.contains(&job.id) => {
                debug!("Already applied for job {}", job.id);
                false
            }
            Some(job) => {
                self.applied.insert(job.id);
                info!("Applied for job {} ({})", job.id, job.title);
                self.notifier
                    .notify(Notification::applied(&job.title, &job.company));
                true
            }
            None => {
                debug!("No job with id {}", job_id);
                false
            }
        }
    }

    fn recompute(&mut self) {
        self.visible = self
            .pipeline
            .apply(&self.jobs, &self.state)
            .into_iter()
            .cloned()
            .collect();
        info!(
            "Visible jobs: {} of {}",
            self.visible.len(),
            self.jobs.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Catalog, RecordingNotifier};

    fn seed_board() -> (JobBoard, RecordingNotifier) {
        let notifier = RecordingNotifier::new();
        let board = JobBoard::new(
            Catalog::seed().jobs().to_vec(),
            Arc::new(notifier.clone()),
        );
        (board, notifier)
    }

    fn visible_ids(board: &JobBoard) -> Vec<JobId> {
        board.visible().iter().map(|j| j.id).collect()
    }

    #[test]
    fn test_starts_unfiltered() {
        let (board, _) = seed_board();
        assert!(!board.is_filtering());
        assert_eq!(visible_ids(&board), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_toggle_notifies_only_on_add() {
        let (mut board, notifier) = seed_board();
        assert!(board.toggle_role("Data"));
        assert_eq!(visible_ids(&board), vec![4]);
        assert!(!board.toggle_role("Data"));
        assert_eq!(visible_ids(&board), vec![1, 2, 3, 4]);

        assert_eq!(notifier.titles(), vec!["Filter Added: Data"]);
    }

    #[test]
    fn test_remote_job_type_uses_flag() {
        let (mut board, _) = seed_board();
        board.toggle_job_type("Remote");
        assert_eq!(visible_ids(&board), vec![1, 3, 4]);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let (mut board, notifier) = seed_board();
        board.toggle_skill("Python");
        board.toggle_job_type("Contract");
        assert!(board.visible().is_empty());

        board.reset();
        let once = visible_ids(&board);
        board.reset();
        assert_eq!(visible_ids(&board), once);
        assert_eq!(once, vec![1, 2, 3, 4]);
        assert_eq!(notifier.titles().last().unwrap(), "Filters Reset");
    }

    #[test]
    fn test_apply_known_and_unknown_job() {
        let (mut board, notifier) = seed_board();
        assert!(board.apply(2));
        assert!(!board.apply(99));

        let received = notifier.received();
        assert_eq!(received.len(), 1);
        assert_eq!(
            received[0].description,
            "You applied for Full Stack Developer at InnoTech Solutions"
        );
    }

    #[test]
    fn test_second_apply_is_a_no_op() {
        let (mut board, notifier) = seed_board();
        assert!(!board.has_applied(2));
        assert!(board.apply(2));
        assert!(board.has_applied(2));
        assert!(!board.apply(2));

        assert_eq!(notifier.titles(), vec!["Application Submitted"]);
        assert!(!board.has_applied(1));
    }

    #[test]
    fn test_applied_survives_filter_changes() {
        let (mut board, _) = seed_board();
        board.apply(4);
        board.toggle_role("Frontend");
        board.reset();
        assert!(board.has_applied(4));
    }
}
