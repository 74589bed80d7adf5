//! Feedback flow: submit a reaction, wait, show every post.

use createmate_core::domain::FeedbackForm;

use super::FlowOutcome;
use super::content::{DisplayMode, show_content};
use super::submit::{FormKind, submit};
use crate::context::AppContext;

pub async fn submit_feedback(ctx: &AppContext, form: &FeedbackForm) -> FlowOutcome {
    let feedback = form.coerce();

    if !submit(ctx, FormKind::Feedback, || ctx.api.submit_feedback(&feedback)).await {
        return FlowOutcome::SubmitFailed;
    }

    tokio::time::sleep(ctx.delays.after_feedback).await;
    show_content(ctx, DisplayMode::All).await
}
