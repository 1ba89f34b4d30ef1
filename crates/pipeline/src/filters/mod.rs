//! Filter implementations for the job pipeline.
//!
//! One filter per category; `FilterPipeline::standard` chains all three.

pub mod job_type;
pub mod role;
pub mod skill;

// Re-export for convenience
pub use job_type::JobTypeFilter;
pub use role::RoleFilter;
pub use skill::SkillFilter;

/// Case-insensitive substring test.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
pub(crate) mod test_support {
    use catalog::Job;

    pub fn job(id: u32, title: &str, skills: &[&str], job_type: &str, is_remote: bool) -> Job {
        Job {
            id,
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Austin".to_string(),
            is_remote,
            job_type: job_type.to_string(),
            description: String::new(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            salary: String::new(),
            logo: String::new(),
            posted_days_ago: 0,
            applicants: 0,
        }
    }
}
