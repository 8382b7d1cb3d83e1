//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types used by both the
//! catalog and the survey modules.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SnapshotId;
pub use timestamp::Timestamp;
