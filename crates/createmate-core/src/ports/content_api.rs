//! Content API port - the remote service behind the forms.

use async_trait::async_trait;

use crate::domain::{AppState, Feedback, UserInput};
use crate::error::ApiError;

/// Successful submission acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ack {
    /// Server message, when the response carried one.
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Content API trait - abstraction over the HTTP service (or a stand-in).
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// POST /user-input
    async fn submit_user_input(&self, input: &UserInput) -> Result<Ack, ApiError>;

    /// POST /feedback
    async fn submit_feedback(&self, feedback: &Feedback) -> Result<Ack, ApiError>;

    /// GET /state
    async fn fetch_state(&self) -> Result<AppState, ApiError>;

    /// GET /health
    async fn health(&self) -> Result<HealthStatus, ApiError>;
}
