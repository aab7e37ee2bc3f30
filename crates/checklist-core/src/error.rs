//! Error Types
//!
//! Storage and catalog errors shared by the core and the browser adapters.

use thiserror::Error;

/// Result alias for persistence operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures talking to the persistence port
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing storage could not be reached at all
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The storage was reachable but rejected a write or removal
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("failed to serialize completion state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Violations of the catalog content contract
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("section {section:?} contains an item with an empty id")]
    EmptyId { section: &'static str },
    #[error("section {0:?} has no items")]
    EmptySection(&'static str),
    #[error("item id {0:?} is defined more than once")]
    DuplicateId(&'static str),
}
