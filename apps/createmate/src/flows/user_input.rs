//! User-input flow: submit preferences, wait, show the first post.

use createmate_core::domain::UserInputForm;
use createmate_core::ports::Notice;

use super::FlowOutcome;
use super::content::{DisplayMode, show_content};
use super::submit::{FormKind, submit};
use crate::context::AppContext;

pub async fn submit_user_input(ctx: &AppContext, form: &UserInputForm) -> FlowOutcome {
    let input = match form.coerce() {
        Ok(input) => input,
        Err(e) => {
            ctx.notify(Notice::error(FormKind::UserInput.error_message(&e)))
                .await;
            return FlowOutcome::SubmitFailed;
        }
    };

    tracing::debug!(keywords = ?input.keywords, post_frequency = input.post_frequency, "Submitting user input");

    if !submit(ctx, FormKind::UserInput, || ctx.api.submit_user_input(&input)).await {
        return FlowOutcome::SubmitFailed;
    }

    tokio::time::sleep(ctx.delays.after_user_input).await;
    show_content(ctx, DisplayMode::Latest).await
}
