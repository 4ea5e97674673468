//! CLI Commands

pub mod config;
pub mod submit;
pub mod survey;

use feedback_client::{ClientConfig, FeedbackSubmitter, HttpSubmitter};
use std::sync::Arc;

pub(crate) fn http_submitter(config: &ClientConfig) -> anyhow::Result<Arc<dyn FeedbackSubmitter>> {
    let submitter = HttpSubmitter::from_config(config)?;
    tracing::debug!("Submitting to {}", submitter.endpoint());
    Ok(Arc::new(submitter))
}
