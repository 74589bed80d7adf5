//! Console notices - printed to stderr so stdout carries only content.

use async_trait::async_trait;

use createmate_core::ports::{Notice, NoticeLevel, Notifier, NotifyError};

pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, notice: Notice) -> Result<(), NotifyError> {
        let marker = match notice.level {
            NoticeLevel::Info => "✔",
            NoticeLevel::Error => "✖",
        };
        eprintln!("{} {}", marker, notice.message);
        Ok(())
    }
}
