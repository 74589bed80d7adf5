//! In-memory content API.
//!
//! Serves scripted `/state` snapshots and records every submission.
//! Used by flow tests and for exercising the client without a server.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;

use createmate_core::domain::{AppState, Feedback, UserInput};
use createmate_core::error::ApiError;
use createmate_core::ports::{Ack, ContentApi, HealthStatus};

#[derive(Default)]
struct Store {
    current: AppState,
    scripted: VecDeque<Result<AppState, ApiError>>,
    submit_failure: Option<ApiError>,
    user_inputs: Vec<UserInput>,
    feedback: Vec<Feedback>,
    state_fetches: Vec<Instant>,
}

/// Content API held entirely in memory.
pub struct InMemoryContentApi {
    store: RwLock<Store>,
}

impl InMemoryContentApi {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::default()),
        }
    }

    /// Start with `state` as the standing snapshot.
    pub fn with_state(state: AppState) -> Self {
        Self {
            store: RwLock::new(Store {
                current: state,
                ..Store::default()
            }),
        }
    }

    /// Queue a response for a future `fetch_state`, served in push order.
    ///
    /// A successful snapshot also becomes the standing one once served.
    pub async fn push_state(&self, response: Result<AppState, ApiError>) {
        self.store.write().await.scripted.push_back(response);
    }

    /// Make every following submission fail with `error`.
    pub async fn fail_submissions(&self, error: ApiError) {
        self.store.write().await.submit_failure = Some(error);
    }

    pub async fn submitted_inputs(&self) -> Vec<UserInput> {
        self.store.read().await.user_inputs.clone()
    }

    pub async fn submitted_feedback(&self) -> Vec<Feedback> {
        self.store.read().await.feedback.clone()
    }

    /// When each `fetch_state` call arrived.
    pub async fn state_fetches(&self) -> Vec<Instant> {
        self.store.read().await.state_fetches.clone()
    }
}

impl Default for InMemoryContentApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentApi for InMemoryContentApi {
    async fn submit_user_input(&self, input: &UserInput) -> Result<Ack, ApiError> {
        let mut store = self.store.write().await;
        if let Some(err) = store.submit_failure.clone() {
            return Err(err);
        }
        store.user_inputs.push(input.clone());
        tracing::debug!(count = store.user_inputs.len(), "User input recorded");
        Ok(Ack {
            message: Some("User input submitted successfully".to_string()),
        })
    }

    async fn submit_feedback(&self, feedback: &Feedback) -> Result<Ack, ApiError> {
        let mut store = self.store.write().await;
        if let Some(err) = store.submit_failure.clone() {
            return Err(err);
        }
        store.feedback.push(feedback.clone());
        tracing::debug!(count = store.feedback.len(), "Feedback recorded");
        Ok(Ack {
            message: Some("Feedback submitted successfully".to_string()),
        })
    }

    async fn fetch_state(&self) -> Result<AppState, ApiError> {
        let mut store = self.store.write().await;
        store.state_fetches.push(Instant::now());

        match store.scripted.pop_front() {
            Some(Ok(state)) => {
                store.current = state.clone();
                Ok(state)
            }
            Some(Err(err)) => Err(err),
            None => Ok(store.current.clone()),
        }
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        Ok(HealthStatus {
            status: "healthy".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use createmate_core::domain::ContentItem;

    #[tokio::test]
    async fn test_scripted_states_then_standing_state() {
        let api = InMemoryContentApi::new();
        let full = AppState::with_content(vec![ContentItem::new("Monday", "Rollups", "Body")]);
        api.push_state(Ok(AppState::default())).await;
        api.push_state(Err(ApiError::Network("reset".to_string()))).await;
        api.push_state(Ok(full.clone())).await;

        assert!(!api.fetch_state().await.unwrap().has_content());
        assert!(api.fetch_state().await.is_err());
        assert_eq!(api.fetch_state().await.unwrap(), full);
        // Queue drained: the last snapshot stands.
        assert_eq!(api.fetch_state().await.unwrap(), full);
        assert_eq!(api.state_fetches().await.len(), 4);
    }

    #[tokio::test]
    async fn test_failed_submission_is_not_recorded() {
        let api = InMemoryContentApi::new();
        api.fail_submissions(ApiError::Server {
            status: 422,
            detail: "bad".to_string(),
        })
        .await;

        let feedback = Feedback {
            liked: false,
            comments: String::new(),
        };
        assert!(api.submit_feedback(&feedback).await.is_err());
        assert!(api.submitted_feedback().await.is_empty());
    }
}
