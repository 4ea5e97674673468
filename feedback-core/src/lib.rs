//! Patient Feedback Core
//!
//! Domain model shared by the survey wizard and the submission endpoint.
//!
//! ## Architecture
//!
//! - **Domain Layer**: the client-side `Draft`, value objects, validation rules,
//!   and the server-side `PersistedFeedback` record
//! - **Ports Layer**: the append-only `FeedbackRepository` interface
//! - **Infrastructure Layer**: in-memory and sled-backed document stores
//!
//! ## Flow
//!
//! ```text
//!  Draft ──(POST /api/feedback)──▶ FeedbackPayload ──presence check──▶ NewFeedback
//!                                                                        │
//!                                   PersistedFeedback ◀──insert──────────┘
//! ```

pub mod domain;
pub mod ports;
pub mod infrastructure;

pub use domain::draft::{Draft, Field, FieldUpdate, ValidationIssue, validate_demographics};
pub use domain::feedback::{
    ErrorBody, FeedbackCreated, FeedbackError, FeedbackId, FeedbackPayload, NewFeedback,
    PersistedFeedback,
};
pub use domain::value_objects::{
    Department, Gender, Language, RatingDimension, Ratings, is_valid_phone, normalize_phone,
};
pub use infrastructure::persistence::{InMemoryFeedbackRepository, SledFeedbackRepository};
pub use ports::outbound::{FeedbackRepository, RepoResult, RepositoryError};
