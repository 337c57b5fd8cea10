//! Shared data models for the Tunelink backend.
//!
//! This crate provides:
//! - Video identifiers and the normalized song summary schema
//! - The related-media result and the `RelatedSource` seam both resolvers implement
//! - The shared resolution error taxonomy
//! - Title heuristics and ISO-8601 duration formatting

pub mod duration;
pub mod error;
pub mod related;
pub mod video;
pub mod work_name;

// Re-export common types
pub use duration::format_duration;
pub use error::{ResolveError, ResolveResult};
pub use related::{RelatedResult, RelatedSource};
pub use video::{mq_thumbnail_url, VideoRef, VideoSummary};
pub use work_name::extract_work_name;
