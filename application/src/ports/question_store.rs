//! Question store port
//!
//! Defines how the engine reads and writes question records against the
//! persistent backing store.

use async_trait::async_trait;
use eller_domain::{Question, QuestionId};
use thiserror::Error;

/// Errors that can occur against the backing store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Store rejected the request (status {status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Missing credential: set {0}")]
    MissingCredential(&'static str),
}

/// Persistent collection of question records keyed by an opaque identifier.
///
/// Writes are at-least-once; protecting against duplicate delivery of a
/// counter update is not this engine's concern.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// All records, ordered most-recent-first.
    async fn load_all(&self) -> Result<Vec<Question>, StoreError>;

    /// One pseudo-random record, `None` when the store is empty.
    ///
    /// Nothing is excluded at the query level; rejecting already-shown
    /// questions is the caller's job.
    async fn fetch_random(&self) -> Result<Option<Question>, StoreError>;

    /// Insert a new record with zero counters. Returns the stored record
    /// with its assigned identifier and timestamp.
    async fn insert(&self, option1: &str, option2: &str) -> Result<Question, StoreError>;

    /// Overwrite the two counters of an existing record.
    async fn update_votes(
        &self,
        id: &QuestionId,
        votes1: u64,
        votes2: u64,
    ) -> Result<(), StoreError>;
}
