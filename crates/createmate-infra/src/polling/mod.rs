//! Poll-until routine: fetch, check, wait, repeat.
//!
//! One fixed interval between attempts, no backoff growth. Unbounded and
//! retrying through fetch failures unless the policy says otherwise.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// What a failed fetch does to the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnPollError {
    /// Wait one interval and fetch again.
    #[default]
    Retry,
    /// End the loop with the failure.
    Stop,
}

/// Poll loop configuration.
#[derive(Debug, Clone)]
pub struct PollPolicy {
    /// Wait between attempts.
    pub interval: Duration,
    /// Attempt ceiling (None = poll until the condition holds).
    pub max_attempts: Option<u32>,
    pub on_error: OnPollError,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(3000),
            max_attempts: None,
            on_error: OnPollError::Retry,
        }
    }
}

impl PollPolicy {
    pub fn every(interval: Duration) -> Self {
        Self {
            interval,
            ..Self::default()
        }
    }

    pub fn with_max_attempts(mut self, max: u32) -> Self {
        self.max_attempts = Some(max);
        self
    }

    pub fn stop_on_error(mut self) -> Self {
        self.on_error = OnPollError::Stop;
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let interval = std::env::var("CREATEMATE_POLL_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(3000));

        Self {
            interval,
            max_attempts: std::env::var("CREATEMATE_POLL_MAX_ATTEMPTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|n| *n > 0),
            on_error: if std::env::var("CREATEMATE_POLL_STOP_ON_ERROR")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false)
            {
                OnPollError::Stop
            } else {
                OnPollError::Retry
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PollError<E> {
    /// A fetch failed and the policy stops on errors.
    #[error("{0}")]
    Fetch(E),

    #[error("Condition not met after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

/// Call `fetch` until its value satisfies `ready`, waiting `policy.interval`
/// between attempts. The first attempt runs immediately.
///
/// Returns the satisfying value; whatever the caller does next is the
/// loop's on-success step.
pub async fn poll_until<T, E, F, Fut, P>(
    policy: &PollPolicy,
    mut fetch: F,
    mut ready: P,
) -> Result<T, PollError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: FnMut(&T) -> bool,
    E: Display,
{
    let mut attempt: u32 = 0;

    loop {
        attempt = next_attempt(attempt);

        match fetch().await {
            Ok(value) if ready(&value) => {
                tracing::debug!(attempt, "Poll condition met");
                return Ok(value);
            }
            Ok(_) => {
                tracing::debug!(attempt, "Poll condition not met yet");
            }
            Err(e) => match policy.on_error {
                OnPollError::Stop => {
                    tracing::warn!(attempt, error = %e, "Poll fetch failed, stopping");
                    return Err(PollError::Fetch(e));
                }
                OnPollError::Retry => {
                    tracing::warn!(attempt, error = %e, "Poll fetch failed, will retry");
                }
            },
        }

        if policy.max_attempts.is_some_and(|max| attempt >= max) {
            tracing::warn!(attempts = attempt, "Poll attempts exhausted");
            return Err(PollError::Exhausted { attempts: attempt });
        }

        tokio::time::sleep(policy.interval).await;
    }
}

/// Attempt numbers stop at `u32::MAX` on an unbounded loop.
fn next_attempt(attempt: u32) -> u32 {
    attempt.saturating_add(1)
}
