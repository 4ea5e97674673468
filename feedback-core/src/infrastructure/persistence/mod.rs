//! Repository implementations
//!
//! Both stores assign the identifier and timestamps themselves and refuse
//! documents that break the schema rules.

mod document_store;

pub use document_store::SledFeedbackRepository;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::domain::feedback::{FeedbackId, NewFeedback, PersistedFeedback};
use crate::ports::outbound::{FeedbackRepository, RepoResult};

/// In-memory feedback repository (for testing and development)
#[derive(Default)]
pub struct InMemoryFeedbackRepository {
    records: RwLock<HashMap<String, PersistedFeedback>>,
}

impl InMemoryFeedbackRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn insert(&self, feedback: NewFeedback) -> RepoResult<PersistedFeedback> {
        let record = PersistedFeedback::create(feedback, FeedbackId::new(), Utc::now());
        record.check_constraints()?;

        self.records
            .write()
            .insert(record.id().to_string(), record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: &FeedbackId) -> RepoResult<Option<PersistedFeedback>> {
        Ok(self.records.read().get(id.as_str()).cloned())
    }

    async fn count(&self) -> RepoResult<u64> {
        Ok(self.records.read().len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Language, RatingDimension, Ratings};
    use crate::ports::outbound::RepositoryError;

    pub(super) fn new_feedback() -> NewFeedback {
        NewFeedback {
            patient_name: "Asha Devi".into(),
            age: None,
            gender: None,
            phone_number: "9876543210".into(),
            department: "cardiology".into(),
            ratings: Ratings::default().with(RatingDimension::OverallSatisfaction, 5),
            comments: String::new(),
            language: Language::En,
            submitted_at: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryFeedbackRepository::new();

        let record = repo.insert(new_feedback()).await.unwrap();
        assert!(!record.id().as_str().is_empty());

        let found = repo.find_by_id(record.id()).await.unwrap().unwrap();
        assert_eq!(found, record);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let repo = InMemoryFeedbackRepository::new();
        let a = repo.insert(new_feedback()).await.unwrap();
        let b = repo.insert(new_feedback()).await.unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_constraint_violation_writes_nothing() {
        let repo = InMemoryFeedbackRepository::new();
        let mut feedback = new_feedback();
        feedback.ratings.set(RatingDimension::Communication, 6);

        let err = repo.insert(feedback).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Constraint(_)));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unknown_id() {
        let repo = InMemoryFeedbackRepository::new();
        let missing = repo.find_by_id(&FeedbackId::from_string("nope")).await.unwrap();
        assert!(missing.is_none());
    }
}
