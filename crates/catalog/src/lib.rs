//! # Catalog Crate
//!
//! Static data for the professional network demo, plus the interfaces of
//! the collaborators the interactive core talks to.
//!
//! ## Main Components
//!
//! - **types**: Domain records (Profile, Job, FeedPost, NearbyProfessional, Catalog)
//! - **seed**: The built-in demo data set
//! - **parser**: JSON readers for catalog files
//! - **index**: Loading from a directory, validation, filter facets
//! - **collaborators**: Notification sink, profile presenter, connection counter
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//!
//! let catalog = Catalog::seed();
//! let sarah = catalog.profile(1).unwrap();
//! println!("{} has {} skills", sarah.full_name, sarah.skills.len());
//! ```

pub mod collaborators;
pub mod error;
pub mod index;
pub mod parser;
pub mod seed;
pub mod types;

pub use collaborators::{
    ChannelNotifier, ConnectionCounter, Notification, Notifier, ProfilePresenter,
    RecordingNotifier, RecordingPresenter, Severity, TracingNotifier,
};
pub use error::{CatalogError, Result};
pub use index::JOB_TYPES;
pub use types::{
    Catalog, FeedPost, Job, JobId, NearbyProfessional, PostId, PostKind, PostMetadata, Profile,
    ProfileId,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert_eq!(catalog.counts(), (0, 0, 0, 0));
    }

    #[test]
    fn test_empty_queries() {
        let catalog = Catalog::new();
        assert!(catalog.profile(999).is_none());
        assert!(catalog.job(999).is_none());
        assert!(catalog.role_tokens().is_empty());
    }

    #[test]
    fn test_profile_lookup_by_id() {
        let catalog = Catalog::seed();
        let emily = catalog.profile(3).unwrap();
        assert_eq!(emily.full_name, "Emily Chen");
        assert_eq!(emily.company, "InnovateTech");
    }
}
