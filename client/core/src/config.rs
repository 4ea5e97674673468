//! Client configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the feedback API, without the `/api/feedback` path
    pub api_url: String,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
    /// How long a toast stays up, in milliseconds
    pub toast_lifetime_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".into(),
            request_timeout_secs: 10,
            toast_lifetime_ms: 3000,
        }
    }
}

impl ClientConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_millis(self.toast_lifetime_ms)
    }
}
