//! Recording notifier - keeps every notice in memory.

use async_trait::async_trait;
use tokio::sync::RwLock;

use createmate_core::ports::{Notice, Notifier, NotifyError};

#[derive(Default)]
pub struct RecordingNotifier {
    notices: RwLock<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn notices(&self) -> Vec<Notice> {
        self.notices.read().await.clone()
    }

    pub async fn messages(&self) -> Vec<String> {
        self.notices
            .read()
            .await
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    pub async fn errors(&self) -> Vec<String> {
        self.notices
            .read()
            .await
            .iter()
            .filter(|n| n.is_error())
            .map(|n| n.message.clone())
            .collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notice: Notice) -> Result<(), NotifyError> {
        tracing::debug!(level = ?notice.level, message = %notice.message, "Notice recorded");
        self.notices.write().await.push(notice);
        Ok(())
    }
}
