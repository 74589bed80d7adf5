//! Polling the state resource and displaying generated content.

use createmate_core::domain::{AppState, ContentItem};
use createmate_core::ports::{Notice, Section};
use createmate_infra::{PollError, poll_until};

use super::FlowOutcome;
use crate::context::AppContext;

/// What a finished poll puts on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// The first generated post.
    Latest,
    /// Every generated post, in server order.
    All,
}

impl DisplayMode {
    pub fn section(self) -> Section {
        match self {
            DisplayMode::Latest => Section::GeneratedContent,
            DisplayMode::All => Section::AllContent,
        }
    }
}

/// Poll `/state` until it holds generated content, then render it.
///
/// Failed fetches are reported and polling carries on, unless the poll
/// policy says to stop.
pub async fn show_content(ctx: &AppContext, display: DisplayMode) -> FlowOutcome {
    let fetch = move || async move {
        let result = ctx.api.fetch_state().await;
        if let Err(e) = &result {
            ctx.notify(Notice::error(format!("Error fetching state: {e}")))
                .await;
        }
        result
    };

    match poll_until(&ctx.poll, fetch, AppState::has_content).await {
        Ok(state) => render(ctx, display, &state.generated_content),
        Err(PollError::Fetch(_)) => FlowOutcome::PollFailed,
        Err(PollError::Exhausted { attempts }) => {
            ctx.notify(Notice::error(format!(
                "Error fetching state: no generated content after {attempts} attempts"
            )))
            .await;
            FlowOutcome::PollFailed
        }
    }
}

fn render(ctx: &AppContext, display: DisplayMode, items: &[ContentItem]) -> FlowOutcome {
    let (markup, shown) = match display {
        DisplayMode::Latest => match items.first() {
            Some(first) => (ctx.renderer.render_item(first), 1),
            None => return FlowOutcome::PollFailed,
        },
        DisplayMode::All => (ctx.renderer.render_list(items), items.len()),
    };

    let section = display.section();
    ctx.view.replace(section, markup);
    ctx.view.reveal(section);
    tracing::info!(section = section.section_id(), items = shown, "Content displayed");

    FlowOutcome::Displayed { items: shown }
}
