//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading or validating a catalog.
///
/// The built-in seed data never produces these; they only surface when a
/// catalog is read from disk.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// File contents were not the expected JSON shape
    #[error("Decode error in {file}: {source}")]
    DecodeError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two records in one collection share an id
    #[error("Duplicate {entity} id {id}")]
    DuplicateId { entity: String, id: u32 },

    /// Referenced entity doesn't exist (e.g., a post by an unknown profile)
    #[error("Missing reference: {entity} with id {id}")]
    MissingReference { entity: String, id: u32 },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
