//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[cfg(feature = "http")]
use createmate_infra::HttpApiConfig;
use createmate_infra::PollPolicy;

/// How long each form waits after a successful submission before polling.
#[derive(Debug, Clone)]
pub struct FollowUpDelays {
    pub after_user_input: Duration,
    pub after_feedback: Duration,
}

impl Default for FollowUpDelays {
    fn default() -> Self {
        Self {
            after_user_input: Duration::from_millis(5000),
            after_feedback: Duration::from_millis(10000),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    #[cfg(feature = "http")]
    pub api: HttpApiConfig,
    pub poll: PollPolicy,
    pub delays: FollowUpDelays,
    /// Write the page here instead of printing sections to the terminal.
    pub html_out: Option<PathBuf>,
    pub alert_webhook_url: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = FollowUpDelays::default();

        Self {
            #[cfg(feature = "http")]
            api: HttpApiConfig::from_env(),
            poll: PollPolicy::from_env(),
            delays: FollowUpDelays {
                after_user_input: millis_var("CREATEMATE_SUBMIT_POLL_DELAY_MS")
                    .unwrap_or(defaults.after_user_input),
                after_feedback: millis_var("CREATEMATE_FEEDBACK_POLL_DELAY_MS")
                    .unwrap_or(defaults.after_feedback),
            },
            html_out: env::var("CREATEMATE_HTML_OUT")
                .ok()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            alert_webhook_url: env::var("ALERT_WEBHOOK_URL")
                .ok()
                .filter(|s| !s.is_empty()),
        }
    }
}

fn millis_var(key: &str) -> Option<Duration> {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .map(Duration::from_millis)
}
