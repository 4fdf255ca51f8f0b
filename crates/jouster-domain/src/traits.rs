//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::record::{AnalysisRecord, NewRecord};

/// Trait for storing and retrieving analysis records
///
/// Implemented by the infrastructure layer (jouster-store). Methods take
/// `&self`; implementations provide their own interior synchronization so a
/// single handle can be shared across request handlers.
pub trait RecordStore {
    /// Error type for store operations
    type Error;

    /// Persist a new record atomically, assigning its id and creation time
    fn insert(&self, record: NewRecord) -> Result<AnalysisRecord, Self::Error>;

    /// Records with at least one topic containing `needle`, case-insensitively
    ///
    /// Each topic is matched on its own, so a needle spanning two topics
    /// (such as `"ai,eth"` for topics `"ai"` and `"ethics"`) matches nothing.
    fn find_by_topic_substring(&self, needle: &str) -> Result<Vec<AnalysisRecord>, Self::Error>;

    /// Every stored record
    fn list_all(&self) -> Result<Vec<AnalysisRecord>, Self::Error>;

    /// Number of stored records
    fn count(&self) -> Result<usize, Self::Error>;
}
