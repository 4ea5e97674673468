//! Sending a finished draft to the feedback API

use async_trait::async_trait;
use feedback_core::{Draft, ErrorBody, FeedbackCreated};
use std::time::Duration;
use thiserror::Error;

use crate::config::ClientConfig;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request never produced a response (refused, timed out, ...)
    #[error("transport error: {0}")]
    Transport(String),

    #[error("server rejected submission ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}

/// Delivers one draft. Implementations must not retry on their own.
#[async_trait]
pub trait FeedbackSubmitter: Send + Sync {
    async fn submit(&self, draft: &Draft) -> Result<FeedbackCreated, SubmitError>;
}

/// Posts drafts as JSON to `{base}/api/feedback`.
pub struct HttpSubmitter {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpSubmitter {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        Ok(Self {
            endpoint: format!("{}/api/feedback", base_url.trim_end_matches('/')),
            client,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, SubmitError> {
        Self::new(&config.api_url, config.request_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FeedbackSubmitter for HttpSubmitter {
    async fn submit(&self, draft: &Draft) -> Result<FeedbackCreated, SubmitError> {
        tracing::debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(draft)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
            };
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<FeedbackCreated>()
            .await
            .map_err(|e| SubmitError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedback_api::{build_router, ApiState};
    use feedback_core::{
        Department, FeedbackId, FeedbackRepository, FieldUpdate, InMemoryFeedbackRepository,
        Language, RatingDimension,
    };
    use std::sync::Arc;
    use tokio::net::TcpListener;

    async fn spawn_api(repo: Arc<InMemoryFeedbackRepository>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = build_router(ApiState::new(repo));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn complete_draft() -> Draft {
        let mut draft = Draft::new(Language::Hi);
        draft.apply(FieldUpdate::PatientName("Asha Devi".into()));
        draft.apply(FieldUpdate::PhoneNumber("98765-43210".into()));
        draft.apply(FieldUpdate::Department(Department::GeneralMedicine));
        draft.ratings.set(RatingDimension::OverallSatisfaction, 4);
        draft
    }

    #[test]
    fn test_endpoint_joins_base() {
        let submitter = HttpSubmitter::new("http://localhost:8080/", Duration::from_secs(1)).unwrap();
        assert_eq!(submitter.endpoint(), "http://localhost:8080/api/feedback");
    }

    #[tokio::test]
    async fn test_submit_against_live_api() {
        let repo = Arc::new(InMemoryFeedbackRepository::new());
        let base = spawn_api(repo.clone()).await;
        let submitter = HttpSubmitter::new(&base, Duration::from_secs(5)).unwrap();

        let created = submitter.submit(&complete_draft()).await.unwrap();
        assert_eq!(created.message, "Feedback saved");

        let record = repo
            .find_by_id(&FeedbackId::from_string(created.id))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.department(), "general-medicine");
        assert_eq!(record.language(), Language::Hi);
        assert_eq!(record.phone_number(), "98765-43210");
    }

    #[tokio::test]
    async fn test_rejection_carries_server_message() {
        let repo = Arc::new(InMemoryFeedbackRepository::new());
        let base = spawn_api(repo.clone()).await;
        let submitter = HttpSubmitter::new(&base, Duration::from_secs(5)).unwrap();

        let mut draft = complete_draft();
        draft.patient_name.clear();

        match submitter.submit(&draft).await {
            Err(SubmitError::Rejected { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "Missing required fields");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Bind then drop to get a port nothing listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let submitter = HttpSubmitter::new(&format!("http://{}", addr), Duration::from_secs(2)).unwrap();
        let result = submitter.submit(&complete_draft()).await;
        assert!(matches!(result, Err(SubmitError::Transport(_))));
    }
}
