//! Filtering of job listings.
//!
//! This crate provides:
//! - Filter trait and one implementation per filter category
//! - FilterPipeline for composing filters
//! - FilterState, the three sets of active tokens
//! - JobBoard, which owns the listings and recomputes the visible subset
//!   on every toggle
//!
//! ## Semantics
//! Categories (roles, skills, job types) combine with AND; tokens within a
//! category combine with OR. An empty category filters nothing, so with
//! no active tokens the full collection is visible. Output order is input
//! order.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::JobBoard;
//!
//! let mut board = JobBoard::new(catalog.jobs().to_vec(), notifier);
//! board.toggle_role("Frontend");
//! board.toggle_job_type("Remote");
//! for job in board.visible() {
//!     println!("{}", job.title);
//! }
//! ```

pub mod filter_pipeline;
pub mod filter_state;
pub mod filters;
pub mod job_board;
pub mod traits;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use filter_state::{Category, FilterState};
pub use job_board::JobBoard;
pub use traits::Filter;
