//! Core domain records for the professional network.
//!
//! Everything here is immutable once loaded. Collections are kept in
//! insertion order because that order is the display order (the deck shows
//! profiles in exactly the order they were supplied).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a profile (stable for the session)
pub type ProfileId = u32;

/// Unique identifier for a job listing
pub type JobId = u32;

/// Unique identifier for a feed post
pub type PostId = u32;

// =============================================================================
// Profile
// =============================================================================

/// A professional profile, presented in the deck for a connect/skip decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    pub full_name: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub skills: Vec<String>,
    /// Years of experience
    pub experience: u32,
    /// Avatar reference (URL or asset key); rendering is someone else's job
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub mutual_connections: u32,
}

// =============================================================================
// Job listing
// =============================================================================

/// A job listing, consumed read-only by the filter engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub is_remote: bool,
    /// Employment type, e.g. "Full-time" or "Contract"
    #[serde(rename = "type")]
    pub job_type: String,
    #[serde(default)]
    pub description: String,
    pub skills: Vec<String>,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub posted_days_ago: u32,
    #[serde(default)]
    pub applicants: u32,
}

// =============================================================================
// Feed
// =============================================================================

/// Kind of a feed post; decides which card the front end would use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Achievement,
    Project,
    Post,
}

/// Optional extra data attached to achievement and project posts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetadata {
    pub title: Option<String>,
    pub level: Option<u8>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

/// A post in the social feed, authored by a known profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPost {
    pub id: PostId,
    pub author_id: ProfileId,
    pub content: String,
    pub hours_ago: u32,
    pub kind: PostKind,
    #[serde(default)]
    pub metadata: Option<PostMetadata>,
}

// =============================================================================
// Nearby
// =============================================================================

/// A professional shown on the "nearby" tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyProfessional {
    pub id: u32,
    pub profile_id: ProfileId,
    pub name: String,
    pub title: String,
    pub company: String,
    pub skills: Vec<String>,
    /// Human-readable distance, e.g. "0.4 mi"
    pub distance: String,
}

// =============================================================================
// Catalog - the static in-memory data set
// =============================================================================

/// Holds every static collection the application renders.
///
/// Collections are `Vec`s so iteration order is insertion order; the
/// `HashMap` side indices give O(1) lookups by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) profiles: Vec<Profile>,
    pub(crate) jobs: Vec<Job>,
    pub(crate) feed: Vec<FeedPost>,
    pub(crate) nearby: Vec<NearbyProfessional>,

    pub(crate) profile_index: HashMap<ProfileId, usize>,
    pub(crate) job_index: HashMap<JobId, usize>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn feed(&self) -> &[FeedPost] {
        &self.feed
    }

    pub fn nearby(&self) -> &[NearbyProfessional] {
        &self.nearby
    }

    /// Get a profile by ID
    pub fn profile(&self, id: ProfileId) -> Option<&Profile> {
        self.profile_index.get(&id).map(|&i| &self.profiles[i])
    }

    /// Get a job by ID
    pub fn job(&self, id: JobId) -> Option<&Job> {
        self.job_index.get(&id).map(|&i| &self.jobs[i])
    }

    /// Insert a profile. A repeated id keeps the first entry in the index;
    /// `validate` reports the duplicate.
    pub fn insert_profile(&mut self, profile: Profile) {
        self.profile_index
            .entry(profile.id)
            .or_insert(self.profiles.len());
        self.profiles.push(profile);
    }

    pub fn insert_job(&mut self, job: Job) {
        self.job_index.entry(job.id).or_insert(self.jobs.len());
        self.jobs.push(job);
    }

    pub fn insert_post(&mut self, post: FeedPost) {
        self.feed.push(post);
    }

    pub fn insert_nearby(&mut self, professional: NearbyProfessional) {
        self.nearby.push(professional);
    }

    /// Get counts for debugging/validation
    pub fn counts(&self) -> (usize, usize, usize, usize) {
        (
            self.profiles.len(),
            self.jobs.len(),
            self.feed.len(),
            self.nearby.len(),
        )
    }
}
