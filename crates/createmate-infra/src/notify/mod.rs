//! Notifier implementations - where user-facing notices end up.

mod console;
mod recording;

#[cfg(feature = "http")]
mod webhook;

use std::sync::Arc;

use async_trait::async_trait;

use createmate_core::ports::{Notice, Notifier, NotifyError};

pub use console::ConsoleNotifier;
pub use recording::RecordingNotifier;

#[cfg(feature = "http")]
pub use webhook::WebhookNotifier;

/// Delivers each notice to every inner notifier, in order.
///
/// A failing target does not stop delivery to the rest; the first failure
/// is returned once all have been tried.
pub struct FanoutNotifier {
    targets: Vec<Arc<dyn Notifier>>,
}

impl FanoutNotifier {
    pub fn new(targets: Vec<Arc<dyn Notifier>>) -> Self {
        Self { targets }
    }
}

#[async_trait]
impl Notifier for FanoutNotifier {
    async fn notify(&self, notice: Notice) -> Result<(), NotifyError> {
        let mut first_error = None;

        for target in &self.targets {
            if let Err(e) = target.notify(notice.clone()).await {
                tracing::warn!(error = %e, "Notice delivery failed");
                first_error.get_or_insert(e);
            }
        }

        first_error.map_or(Ok(()), Err)
    }
}
