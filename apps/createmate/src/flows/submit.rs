//! Form submission: send once, confirm or report, never retry.

use std::future::Future;

use createmate_core::error::ApiError;
use createmate_core::ports::{Ack, Notice};

use crate::context::AppContext;

/// Which form a submission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormKind {
    UserInput,
    Feedback,
}

impl FormKind {
    fn label(self) -> &'static str {
        match self {
            FormKind::UserInput => "user input",
            FormKind::Feedback => "feedback",
        }
    }

    fn confirmation(self) -> &'static str {
        match self {
            FormKind::UserInput => "User input submitted successfully.",
            FormKind::Feedback => "Feedback submitted successfully.",
        }
    }

    pub(crate) fn error_message(self, reason: impl std::fmt::Display) -> String {
        format!("Error submitting {}: {}", self.label(), reason)
    }
}

/// Run one submission and tell the user how it went.
///
/// Returns whether the server accepted it; the caller polls only then.
pub(crate) async fn submit<F, Fut>(ctx: &AppContext, kind: FormKind, request: F) -> bool
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Ack, ApiError>>,
{
    match request().await {
        Ok(ack) => {
            tracing::info!(form = kind.label(), server_message = ?ack.message, "Submission accepted");
            ctx.notify(Notice::info(kind.confirmation())).await;
            true
        }
        Err(e) => {
            tracing::warn!(form = kind.label(), status = ?e.status(), error = %e, "Submission failed");
            ctx.notify(Notice::error(kind.error_message(&e))).await;
            false
        }
    }
}
