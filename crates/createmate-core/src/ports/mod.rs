//! Ports - trait definitions for external collaborators.
//! Infrastructure implements these; flows only see the traits.

mod content_api;
mod notifier;
mod view;

pub use content_api::{Ack, ContentApi, HealthStatus};
pub use notifier::{Notice, NoticeLevel, Notifier, NotifyError};
pub use view::{ContentView, Section};
