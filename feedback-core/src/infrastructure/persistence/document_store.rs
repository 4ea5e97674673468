//! Sled-backed document store
//!
//! One tree of JSON documents keyed by feedback id. Inserts use
//! compare-and-swap against an empty slot, so a document is written at most
//! once and never overwritten. An insert only succeeds once the document is
//! flushed; a failed flush takes the document back out.

use async_trait::async_trait;
use chrono::Utc;
use std::future::Future;
use std::path::Path;

use crate::domain::feedback::{FeedbackId, NewFeedback, PersistedFeedback};
use crate::ports::outbound::{FeedbackRepository, RepoResult, RepositoryError};

const FEEDBACK_TREE: &str = "feedback";

pub struct SledFeedbackRepository {
    db: sled::Db,
    tree: sled::Tree,
}

impl SledFeedbackRepository {
    /// Open (or create) the database directory at `path`
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        let db = sled::open(path).map_err(storage)?;
        Self::from_db(db)
    }

    /// Throwaway database removed on drop
    pub fn temporary() -> RepoResult<Self> {
        let db = sled::Config::new().temporary(true).open().map_err(storage)?;
        Self::from_db(db)
    }

    fn from_db(db: sled::Db) -> RepoResult<Self> {
        let tree = db.open_tree(FEEDBACK_TREE).map_err(storage)?;
        Ok(Self { db, tree })
    }

    /// Bytes on disk, for the startup log line
    pub fn size_on_disk(&self) -> RepoResult<u64> {
        self.db.size_on_disk().map_err(storage)
    }
}

fn storage(err: sled::Error) -> RepositoryError {
    RepositoryError::Storage(err.to_string())
}

/// Store `document` under a vacant `key` and wait for `flush`.
async fn write_once<F, Fut>(tree: &sled::Tree, key: &str, document: Vec<u8>, flush: F) -> RepoResult<()>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = sled::Result<usize>>,
{
    tree.compare_and_swap(key, None as Option<&[u8]>, Some(document))
        .map_err(storage)?
        .map_err(|_| RepositoryError::Storage(format!("duplicate id {}", key)))?;

    if let Err(e) = flush().await {
        tracing::warn!(id = key, error = %e, "flush failed, removing unflushed document");
        if let Err(undo) = tree.remove(key) {
            tracing::error!(id = key, error = %undo, "could not remove unflushed document");
        }
        return Err(storage(e));
    }
    Ok(())
}

#[async_trait]
impl FeedbackRepository for SledFeedbackRepository {
    async fn insert(&self, feedback: NewFeedback) -> RepoResult<PersistedFeedback> {
        let record = PersistedFeedback::create(feedback, FeedbackId::new(), Utc::now());
        record.check_constraints()?;

        let document = serde_json::to_vec(&record)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        write_once(&self.tree, record.id().as_str(), document, || self.tree.flush_async()).await?;

        tracing::debug!(id = %record.id(), "feedback document written");
        Ok(record)
    }

    async fn find_by_id(&self, id: &FeedbackId) -> RepoResult<Option<PersistedFeedback>> {
        let Some(bytes) = self.tree.get(id.as_str()).map_err(storage)? else {
            return Ok(None);
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))
    }

    async fn count(&self) -> RepoResult<u64> {
        Ok(self.tree.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::tests::new_feedback;
    use crate::domain::value_objects::RatingDimension;

    #[tokio::test]
    async fn test_insert_and_read_back() {
        let repo = SledFeedbackRepository::temporary().unwrap();

        let record = repo.insert(new_feedback()).await.unwrap();
        let found = repo.find_by_id(record.id()).await.unwrap().unwrap();

        assert_eq!(found, record);
        assert_eq!(found.gender(), None);
        assert_eq!(found.comments(), "");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_rejected_document_not_written() {
        let repo = SledFeedbackRepository::temporary().unwrap();
        let mut feedback = new_feedback();
        feedback.ratings.set(RatingDimension::TreatmentQuality, 8);

        assert!(matches!(repo.insert(feedback).await, Err(RepositoryError::Constraint(_))));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_failed_flush_leaves_no_document() {
        let repo = SledFeedbackRepository::temporary().unwrap();

        let result = write_once(&repo.tree, "fb-1", b"{}".to_vec(), || async {
            Err(sled::Error::Unsupported("disk full".into()))
        })
        .await;

        assert!(matches!(result, Err(RepositoryError::Storage(_))));
        assert!(repo.tree.get("fb-1").unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_existing_document_is_never_replaced() {
        let repo = SledFeedbackRepository::temporary().unwrap();

        write_once(&repo.tree, "fb-1", b"first".to_vec(), || repo.tree.flush_async())
            .await
            .unwrap();
        let again =
            write_once(&repo.tree, "fb-1", b"second".to_vec(), || repo.tree.flush_async()).await;

        assert!(matches!(again, Err(RepositoryError::Storage(_))));
        assert_eq!(repo.tree.get("fb-1").unwrap().as_deref(), Some(&b"first"[..]));
    }

    #[tokio::test]
    async fn test_documents_survive_reopen() {
        let dir = std::env::temp_dir().join(format!("feedback-store-{}", uuid::Uuid::new_v4()));

        let id = {
            let repo = SledFeedbackRepository::open(&dir).unwrap();
            repo.insert(new_feedback()).await.unwrap().id().clone()
        };

        let repo = SledFeedbackRepository::open(&dir).unwrap();
        let found = repo.find_by_id(&id).await.unwrap();
        assert_eq!(found.map(|r| r.patient_name().to_string()), Some("Asha Devi".to_string()));

        drop(repo);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
