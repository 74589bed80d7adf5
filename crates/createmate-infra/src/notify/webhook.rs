//! Webhook notices - POSTs each notice to a chat webhook (Slack, Discord, etc.).

use async_trait::async_trait;
use chrono::SecondsFormat;

use createmate_core::ports::{Notice, NoticeLevel, Notifier, NotifyError};

pub struct WebhookNotifier {
    url: String,
    client: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    fn payload(notice: &Notice) -> serde_json::Value {
        let label = match notice.level {
            NoticeLevel::Info => "CreateMate",
            NoticeLevel::Error => "CreateMate error",
        };
        serde_json::json!({
            "text": format!(
                "*{}*\n{}\n_{}_",
                label,
                notice.message,
                notice.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
            )
        })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, notice: Notice) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.url)
            .json(&Self::payload(&notice))
            .send()
            .await
            .map_err(|e| NotifyError::Send(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NotifyError::Send(format!(
                "webhook answered HTTP {}",
                response.status().as_u16()
            )));
        }

        Ok(())
    }
}
