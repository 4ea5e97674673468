//! Outbound ports (Repository traits)
//!
//! Storage is append-only: feedback is inserted once and read back, never
//! updated or deleted.

use async_trait::async_trait;

use crate::domain::feedback::{FeedbackError, FeedbackId, NewFeedback, PersistedFeedback};

/// Repository result type
pub type RepoResult<T> = Result<T, RepositoryError>;

/// Repository errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum RepositoryError {
    /// The document breaks the storage schema; nothing was written
    #[error("constraint violation: {0}")]
    Constraint(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<FeedbackError> for RepositoryError {
    fn from(err: FeedbackError) -> Self {
        match err {
            FeedbackError::ConstraintViolation(msg) => Self::Constraint(msg),
            other => Self::Constraint(other.to_string()),
        }
    }
}

/// Feedback repository port
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Assign id and timestamps, check the schema, and write one document
    async fn insert(&self, feedback: NewFeedback) -> RepoResult<PersistedFeedback>;

    /// Find feedback by ID
    async fn find_by_id(&self, id: &FeedbackId) -> RepoResult<Option<PersistedFeedback>>;

    /// Number of stored documents
    async fn count(&self) -> RepoResult<u64>;
}
