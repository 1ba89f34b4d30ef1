//! Catalog building, validation and derived facets.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Job types offered as filter tokens, in display order.
pub const JOB_TYPES: [&str; 4] = ["Full-time", "Part-time", "Contract", "Remote"];

impl Catalog {
    /// Load a catalog from a directory of JSON files.
    ///
    /// Steps:
    /// 1. Parse all four files (profiles, jobs, feed, nearby) in parallel
    /// 2. Insert in file order, which becomes display order
    /// 3. Validate ids and cross references
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        info!("Loading catalog from {:?}", data_dir);

        let profiles_path = data_dir.join("profiles.json");
        let jobs_path = data_dir.join("jobs.json");
        let feed_path = data_dir.join("feed.json");
        let nearby_path = data_dir.join("nearby.json");

        let ((profiles, jobs), (feed, nearby)) = rayon::join(
            || {
                rayon::join(
                    || parser::parse_profiles(&profiles_path),
                    || parser::parse_jobs(&jobs_path),
                )
            },
            || {
                rayon::join(
                    || parser::parse_feed(&feed_path),
                    || parser::parse_nearby(&nearby_path),
                )
            },
        );

        let mut catalog = Catalog::new();
        for profile in profiles? {
            catalog.insert_profile(profile);
        }
        for job in jobs? {
            catalog.insert_job(job);
        }
        for post in feed? {
            catalog.insert_post(post);
        }
        for professional in nearby? {
            catalog.insert_nearby(professional);
        }

        catalog.validate()?;

        let (profiles, jobs, posts, nearby) = catalog.counts();
        info!(
            "Loaded {} profiles, {} jobs, {} posts, {} nearby",
            profiles, jobs, posts, nearby
        );
        Ok(catalog)
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - profile, job, post and nearby ids are unique within their collection
    /// - every post author and nearby entry points at a known profile
    pub fn validate(&self) -> Result<()> {
        check_unique("Profile", self.profiles.iter().map(|p| p.id))?;
        check_unique("Job", self.jobs.iter().map(|j| j.id))?;
        check_unique("Post", self.feed.iter().map(|p| p.id))?;
        check_unique("Nearby", self.nearby.iter().map(|n| n.id))?;

        for post in &self.feed {
            if self.profile(post.author_id).is_none() {
                return Err(CatalogError::MissingReference {
                    entity: "Profile".to_string(),
                    id: post.author_id,
                });
            }
        }
        for professional in &self.nearby {
            if self.profile(professional.profile_id).is_none() {
                return Err(CatalogError::MissingReference {
                    entity: "Profile".to_string(),
                    id: professional.profile_id,
                });
            }
        }
        Ok(())
    }

    /// Distinct first word of every job title, in first-seen order.
    pub fn role_tokens(&self) -> Vec<String> {
        distinct(
            self.jobs
                .iter()
                .filter_map(|job| job.title.split(' ').next())
                .filter(|word| !word.is_empty()),
        )
    }

    /// Distinct job skills, in first-seen order.
    pub fn skill_tokens(&self) -> Vec<String> {
        distinct(
            self.jobs
                .iter()
                .flat_map(|job| job.skills.iter().map(String::as_str)),
        )
    }
}

fn check_unique(entity: &str, ids: impl Iterator<Item = u32>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                entity: entity.to_string(),
                id,
            });
        }
    }
    Ok(())
}

fn distinct<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .filter(|item| seen.insert(*item))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: JobId, title: &str, skills: &[&str]) -> Job {
        Job {
            id,
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Austin".to_string(),
            is_remote: false,
            job_type: "Full-time".to_string(),
            description: String::new(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            salary: String::new(),
            logo: String::new(),
            posted_days_ago: 0,
            applicants: 0,
        }
    }

    #[test]
    fn test_role_tokens_first_word_in_order() {
        let mut catalog = Catalog::new();
        catalog.insert_job(job(1, "Senior UX Designer", &[]));
        catalog.insert_job(job(2, "Data Engineer", &[]));
        catalog.insert_job(job(3, "Senior Data Analyst", &[]));

        assert_eq!(catalog.role_tokens(), vec!["Senior", "Data"]);
    }

    #[test]
    fn test_skill_tokens_are_distinct() {
        let mut catalog = Catalog::new();
        catalog.insert_job(job(1, "A", &["React", "AWS"]));
        catalog.insert_job(job(2, "B", &["AWS", "Python"]));

        assert_eq!(catalog.skill_tokens(), vec!["React", "AWS", "Python"]);
    }

    #[test]
    fn test_duplicate_job_id_fails_validation() {
        let mut catalog = Catalog::new();
        catalog.insert_job(job(1, "A", &[]));
        catalog.insert_job(job(1, "B", &[]));

        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { id: 1, .. }));
        // The index keeps the first record
        assert_eq!(catalog.job(1).unwrap().title, "A");
    }

    #[test]
    fn test_post_by_unknown_author_fails_validation() {
        let mut catalog = Catalog::new();
        catalog.insert_post(FeedPost {
            id: 1,
            author_id: 42,
            content: "hello".to_string(),
            hours_ago: 1,
            kind: PostKind::Post,
            metadata: None,
        });

        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, CatalogError::MissingReference { id: 42, .. }));
    }
}
