//! reqwest-backed content API client.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::Instrument;
use uuid::Uuid;

use createmate_core::domain::{AppState, ContentItem, Feedback, UserInput};
use createmate_core::error::ApiError;
use createmate_core::ports::{Ack, ContentApi, HealthStatus};
use createmate_shared::ErrorBody;
use createmate_shared::dto::{
    FeedbackRequest, HealthResponse, StateResponse, SubmitResponse, UserInputRequest,
};

/// Header carrying a per-request ID, for correlating client and server logs.
pub static REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Content API connection configuration.
#[derive(Debug, Clone)]
pub struct HttpApiConfig {
    /// Base URL of the API (e.g., http://localhost:8000)
    pub base_url: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl Default for HttpApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl HttpApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("CREATEMATE_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            timeout: Duration::from_secs(
                std::env::var("CREATEMATE_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }
}

/// Content API over HTTP with JSON bodies.
pub struct HttpContentApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpContentApi {
    pub fn new(config: HttpApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        tracing::debug!(base_url = %config.base_url, "Content API client ready");

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create from environment configuration.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(HttpApiConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and return the body of a 2xx response.
    ///
    /// Non-2xx responses become [`ApiError::Server`] carrying the body's
    /// `detail`, or `HTTP <status>` when the body has none.
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &'static str,
    ) -> Result<String, ApiError> {
        let request_id = Uuid::new_v4().to_string();
        let span = tracing::info_span!("api_request", endpoint, request_id = %request_id);

        async move {
            let response = request
                .header(REQUEST_ID_HEADER, &request_id)
                .send()
                .await
                .map_err(|e| {
                    tracing::warn!(error = %e, "Request failed");
                    ApiError::Network(e.to_string())
                })?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            if !status.is_success() {
                let detail = ErrorBody::parse(&body)
                    .and_then(|b| b.detail_text())
                    .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
                tracing::warn!(status = status.as_u16(), detail = %detail, "API error response");
                return Err(ApiError::Server {
                    status: status.as_u16(),
                    detail,
                });
            }

            tracing::debug!(status = status.as_u16(), "API response");
            Ok(body)
        }
        .instrument(span)
        .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &'static str,
    ) -> Result<T, ApiError> {
        let body = self.execute(self.client.get(self.url(path)), path).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_json<B: serde::Serialize>(
        &self,
        path: &'static str,
        payload: &B,
    ) -> Result<Ack, ApiError> {
        let body = self
            .execute(self.client.post(self.url(path)).json(payload), path)
            .await?;

        // The acknowledgement body is informational only.
        let message = serde_json::from_str::<SubmitResponse>(&body)
            .ok()
            .and_then(|r| r.message);
        Ok(Ack { message })
    }
}

#[async_trait]
impl ContentApi for HttpContentApi {
    async fn submit_user_input(&self, input: &UserInput) -> Result<Ack, ApiError> {
        let payload = UserInputRequest {
            area_of_interest: input.area_of_interest.clone(),
            content_type: input.content_type.clone(),
            keywords: input.keywords.clone(),
            post_frequency: input.post_frequency,
        };
        self.post_json("/user-input", &payload).await
    }

    async fn submit_feedback(&self, feedback: &Feedback) -> Result<Ack, ApiError> {
        let payload = FeedbackRequest {
            liked: feedback.liked,
            comments: feedback.comments.clone(),
        };
        self.post_json("/feedback", &payload).await
    }

    async fn fetch_state(&self) -> Result<AppState, ApiError> {
        let state: StateResponse = self.get_json("/state").await?;

        Ok(AppState {
            generated_content: state
                .generated_content
                .into_iter()
                .map(|item| ContentItem::new(item.day, item.topic, item.content))
                .collect(),
            user_input: state.user_input,
            schedule: state.schedule,
            suggested_topics: state.suggested_topics,
        })
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let health: HealthResponse = self.get_json("/health").await?;
        Ok(HealthStatus {
            status: health.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_for(server: &MockServer) -> HttpContentApi {
        HttpContentApi::new(HttpApiConfig {
            base_url: format!("{}/", server.uri()),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    fn sample_input() -> UserInput {
        UserInput {
            area_of_interest: "tech".to_string(),
            content_type: "blog".to_string(),
            keywords: vec!["ai".to_string(), "ml".to_string()],
            post_frequency: 3,
        }
    }

    #[tokio::test]
    async fn test_submit_user_input_posts_json_once() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user-input"))
            .and(header_exists("x-request-id"))
            .and(body_json(json!({
                "area_of_interest": "tech",
                "content_type": "blog",
                "keywords": ["ai", "ml"],
                "post_frequency": 3
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"message": "User input received"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let ack = api_for(&server)
            .submit_user_input(&sample_input())
            .await
            .unwrap();
        assert_eq!(ack.message.as_deref(), Some("User input received"));
    }

    #[tokio::test]
    async fn test_submit_feedback_accepts_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/feedback"))
            .and(body_json(json!({"liked": true, "comments": "Great!"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let ack = api_for(&server)
            .submit_feedback(&Feedback {
                liked: true,
                comments: "Great!".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(ack, Ack::default());
    }

    #[tokio::test]
    async fn test_non_2xx_surfaces_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user-input"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"detail": "query timed out"})),
            )
            .mount(&server)
            .await;

        let err = api_for(&server)
            .submit_user_input(&sample_input())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                detail: "query timed out".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_non_2xx_without_detail_uses_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/state"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let err = api_for(&server).fetch_state().await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[tokio::test]
    async fn test_fetch_state_maps_items_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/state"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user_input": null,
                "schedule": {"posting_days": ["Monday"]},
                "generated_content": [
                    {"day": "Monday", "topic": "Rollups", "content": "Body one"},
                    {"day": 2, "topic": "Staking", "content": "Body two"}
                ],
                "suggested_topics": null
            })))
            .mount(&server)
            .await;

        let state = api_for(&server).fetch_state().await.unwrap();
        assert_eq!(
            state.generated_content,
            vec![
                ContentItem::new("Monday", "Rollups", "Body one"),
                ContentItem::new("2", "Staking", "Body two"),
            ]
        );
        assert!(state.schedule.is_some());
        assert!(state.user_input.is_none());
    }

    #[tokio::test]
    async fn test_fetch_state_rejects_non_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/state"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = api_for(&server).fetch_state().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
            .mount(&server)
            .await;

        let health = api_for(&server).health().await.unwrap();
        assert!(health.is_healthy());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let api = HttpContentApi::new(HttpApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_secs(2),
        })
        .unwrap();

        let err = api.fetch_state().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
