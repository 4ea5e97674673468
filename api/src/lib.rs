//! Patient Feedback API
//!
//! Receives completed survey drafts and stores them as feedback documents.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                          FEEDBACK API                          │
//! │                                                                │
//! │  POST /api/feedback ──▶ presence check ──▶ FeedbackRepository  │
//! │                                                  │             │
//! │                                      ┌───────────┴─────────┐   │
//! │                                      │ in-memory │  sled   │   │
//! │                                      └─────────────────────┘   │
//! │  GET /health                                                   │
//! │  GET /api-docs/openapi.json                                    │
//! └────────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod routes;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Json, Router,
};
use feedback_core::FeedbackRepository;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub use config::{ServerConfig, StorageBackend};
pub use error::ApiError;

/// API state
#[derive(Clone)]
pub struct ApiState {
    /// Where accepted feedback is written
    pub repository: Arc<dyn FeedbackRepository>,
    /// API version
    pub version: String,
}

impl ApiState {
    /// State backed by the given repository
    pub fn new(repository: Arc<dyn FeedbackRepository>) -> Self {
        Self {
            repository,
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Patient Feedback API",
        version = "1.0.0",
        description = "Stores multilingual patient-satisfaction survey responses",
        license(name = "Apache-2.0")
    ),
    paths(
        routes::health::health_check,
        routes::feedback::create_feedback,
    ),
    components(
        schemas(
            feedback_core::FeedbackPayload,
            feedback_core::FeedbackCreated,
            feedback_core::ErrorBody,
            feedback_core::Ratings,
            feedback_core::Gender,
            feedback_core::Language,
            routes::health::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "feedback", description = "Survey submission")
    )
)]
pub struct ApiDoc;

/// Build the API router
pub fn build_router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/api/feedback", post(routes::feedback::create_feedback))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
