//! Server configuration
//!
//! Flags with environment fallbacks. Defaults suit a single-host deployment.

use clap::{Parser, ValueEnum};
use feedback_core::{
    FeedbackRepository, InMemoryFeedbackRepository, RepoResult, SledFeedbackRepository,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Command-line and environment configuration for `feedback-api`
#[derive(Debug, Clone, Parser)]
#[command(name = "feedback-api")]
#[command(version)]
#[command(about = "Patient feedback submission API", long_about = None)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "FEEDBACK_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Storage backend
    #[arg(long, env = "FEEDBACK_STORAGE", value_enum, default_value = "sled")]
    pub storage: StorageBackend,

    /// Database directory for the sled backend
    #[arg(long, env = "FEEDBACK_DATA_DIR", default_value = "./data/feedback")]
    pub data_dir: PathBuf,

    /// Tracing filter directive
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

/// Where feedback documents are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// Lost on restart; for development
    Memory,
    /// Embedded sled database under `data_dir`
    Sled,
}

impl ServerConfig {
    /// Open the configured repository
    pub fn open_repository(&self) -> RepoResult<Arc<dyn FeedbackRepository>> {
        match self.storage {
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; feedback will not survive a restart");
                Ok(Arc::new(InMemoryFeedbackRepository::new()))
            }
            StorageBackend::Sled => {
                let repo = SledFeedbackRepository::open(&self.data_dir)?;
                tracing::info!(
                    "Opened feedback store at {} ({} bytes)",
                    self.data_dir.display(),
                    repo.size_on_disk().unwrap_or(0)
                );
                Ok(Arc::new(repo))
            }
        }
    }
}
