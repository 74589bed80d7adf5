//! One-shot reads: current state and API health.

use std::io::Write;

use createmate_core::domain::AppState;
use createmate_core::ports::Notice;
use createmate_core::render::{Renderer, TextRenderer};

use crate::context::AppContext;

/// GET /state once and print it.
pub async fn print_state(ctx: &AppContext, out: &mut impl Write) -> std::io::Result<bool> {
    match ctx.api.fetch_state().await {
        Ok(state) => {
            write_state(&state, out)?;
            Ok(true)
        }
        Err(e) => {
            ctx.notify(Notice::error(format!("Error fetching state: {e}")))
                .await;
            Ok(false)
        }
    }
}

fn write_state(state: &AppState, out: &mut impl Write) -> std::io::Result<()> {
    if let Some(schedule) = &state.schedule {
        writeln!(out, "Schedule: {schedule}")?;
    }
    if let Some(topics) = state.suggested_topics.as_ref().filter(|t| !t.is_empty()) {
        writeln!(out, "Suggested topics: {}", topics.join(", "))?;
    }

    if state.has_content() {
        writeln!(out, "Generated content:\n")?;
        write!(out, "{}", TextRenderer.render_list(&state.generated_content))?;
    } else {
        writeln!(out, "No generated content yet.")?;
    }
    Ok(())
}

/// GET /health once.
pub async fn check_health(ctx: &AppContext) -> bool {
    match ctx.api.health().await {
        Ok(health) if health.is_healthy() => {
            ctx.notify(Notice::info("API is healthy.")).await;
            true
        }
        Ok(health) => {
            ctx.notify(Notice::error(format!("API reports status: {}", health.status)))
                .await;
            false
        }
        Err(e) => {
            ctx.notify(Notice::error(format!("Error checking health: {e}")))
                .await;
            false
        }
    }
}
