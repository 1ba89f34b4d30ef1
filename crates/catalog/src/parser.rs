//! JSON readers for catalog files.
//!
//! A catalog directory holds up to four files:
//! - profiles.json: `[Profile]`
//! - jobs.json: `[Job]`
//! - feed.json: `[FeedPost]` (optional)
//! - nearby.json: `[NearbyProfessional]` (optional)

use crate::error::{CatalogError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read and decode one JSON array file.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::DecodeError {
        file: path.display().to_string(),
        source,
    })
}

/// Like `read_json`, but a missing file is an empty collection.
fn read_optional_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if path.exists() {
        read_json(path)
    } else {
        Ok(Vec::new())
    }
}

pub fn parse_profiles(path: &Path) -> Result<Vec<Profile>> {
    read_json(path)
}

pub fn parse_jobs(path: &Path) -> Result<Vec<Job>> {
    let jobs: Vec<Job> = read_json(path)?;
    for job in &jobs {
        if job.job_type.trim().is_empty() {
            return Err(CatalogError::InvalidValue {
                field: "type".to_string(),
                value: format!("job {} has an empty type", job.id),
            });
        }
    }
    Ok(jobs)
}

pub fn parse_feed(path: &Path) -> Result<Vec<FeedPost>> {
    read_optional_json(path)
}

pub fn parse_nearby(path: &Path) -> Result<Vec<NearbyProfessional>> {
    read_optional_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_jobs_reads_type_and_remote_flag() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":7,"title":"Data Engineer","company":"AnalyticsPro","location":"Remote",
                "isRemote":true,"type":"Contract","skills":["Python","SQL"]}}]"#
        )
        .unwrap();

        let jobs = parse_jobs(file.path()).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job_type, "Contract");
        assert!(jobs[0].is_remote);
        assert_eq!(jobs[0].applicants, 0);
    }

    #[test]
    fn test_parse_jobs_rejects_blank_type() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":1,"title":"X","company":"Y","location":"Z","isRemote":false,"type":" ","skills":[]}}]"#
        )
        .unwrap();

        let err = parse_jobs(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { .. }));
    }

    #[test]
    fn test_missing_required_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_profiles(&dir.path().join("profiles.json")).unwrap_err();
        assert!(matches!(err, CatalogError::FileNotFound { .. }));
    }

    #[test]
    fn test_missing_optional_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let feed = parse_feed(&dir.path().join("feed.json")).unwrap();
        assert!(feed.is_empty());
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = parse_profiles(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::DecodeError { .. }));
    }
}
