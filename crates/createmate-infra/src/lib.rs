//! # CreateMate Infrastructure
//!
//! Concrete implementations of the ports defined in `createmate-core`,
//! plus the poll-until routine both content flows share.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No HTTP client, in-memory API only
//! - `http` - reqwest-backed content API and webhook notices

pub mod memory;
pub mod notify;
pub mod polling;
pub mod view;

#[cfg(feature = "http")]
pub mod http;

// Re-exports - always available
pub use memory::InMemoryContentApi;
pub use notify::{ConsoleNotifier, FanoutNotifier, RecordingNotifier};
pub use polling::{OnPollError, PollError, PollPolicy, poll_until};
pub use view::{HtmlPage, TerminalView};

// Re-exports - HTTP
#[cfg(feature = "http")]
pub use http::{HttpApiConfig, HttpContentApi};
#[cfg(feature = "http")]
pub use notify::WebhookNotifier;
