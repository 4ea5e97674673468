//! Feedback submission endpoint
//!
//! Append-only: one POST creates one document. There is no update or delete.

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use feedback_core::{FeedbackCreated, FeedbackPayload, RepositoryError};
use std::sync::Arc;

use crate::{ApiError, ApiState};

/// Submit a completed survey
#[utoipa::path(
    post,
    path = "/api/feedback",
    request_body = FeedbackPayload,
    responses(
        (status = 201, description = "Feedback stored", body = FeedbackCreated),
        (status = 400, description = "Missing required fields or invalid body", body = feedback_core::ErrorBody),
        (status = 500, description = "Storage failure", body = feedback_core::ErrorBody)
    ),
    tag = "feedback"
)]
pub async fn create_feedback(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<FeedbackPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<FeedbackCreated>), ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!("Rejected feedback body: {}", rejection.body_text());
        ApiError::InvalidBody
    })?;

    let feedback = payload.into_new_feedback().map_err(|e| {
        tracing::warn!("Rejected feedback: {}", e);
        ApiError::from(e)
    })?;

    let record = state.repository.insert(feedback).await.map_err(|e| {
        match &e {
            RepositoryError::Constraint(detail) => {
                tracing::warn!("Feedback failed schema check: {}", detail)
            }
            _ => tracing::error!("Feedback storage error: {}", e),
        }
        ApiError::from(e)
    })?;

    tracing::info!(
        id = %record.id(),
        department = record.department(),
        language = %record.language(),
        "Feedback saved"
    );

    Ok((
        StatusCode::CREATED,
        Json(FeedbackCreated {
            message: "Feedback saved".into(),
            id: record.id().to_string(),
        }),
    ))
}
