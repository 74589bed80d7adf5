//! # CreateMate
//!
//! Command-line client for the CreateMate content API.

use std::process::ExitCode;

use clap::Parser;

use createmate_core::domain::{FeedbackForm, UserInputForm};

mod cli;
mod config;
mod context;
mod flows;
mod inspect;
mod telemetry;

use cli::{Cli, Command, FeedbackArgs, UserInputArgs};
use config::AppConfig;
use context::AppContext;
use flows::FlowOutcome;
use telemetry::TelemetryConfig;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    #[cfg_attr(not(feature = "http"), allow(unused_mut))]
    let mut config = AppConfig::from_env();
    if let Some(url) = &cli.api_url {
        #[cfg(feature = "http")]
        {
            config.api.base_url = url.clone();
        }
        #[cfg(not(feature = "http"))]
        tracing::warn!(url = %url, "--api-url ignored: built without http feature");
    }

    let ctx = AppContext::from_config(&config)?;

    let ok = match &cli.command {
        Command::Submit(args) => {
            let outcome = flows::submit_user_input(&ctx, &UserInputForm::from(args)).await;
            finished(flows::DisplayMode::Latest, outcome)
        }
        Command::Feedback(args) => {
            let outcome = flows::submit_feedback(&ctx, &FeedbackForm::from(args)).await;
            finished(flows::DisplayMode::All, outcome)
        }
        Command::Run { input, feedback } => run_both(&ctx, input, feedback).await,
        Command::State => inspect::print_state(&ctx, &mut std::io::stdout()).await?,
        Command::Health => inspect::check_health(&ctx).await,
    };

    ctx.persist_page()?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Both forms in order, the way a user fills in the page.
async fn run_both(ctx: &AppContext, input: &UserInputArgs, feedback: &FeedbackArgs) -> bool {
    let outcome = flows::submit_user_input(ctx, &UserInputForm::from(input)).await;
    if !finished(flows::DisplayMode::Latest, outcome) {
        tracing::warn!("Skipping feedback: no content was displayed");
        return false;
    }

    let outcome = flows::submit_feedback(ctx, &FeedbackForm::from(feedback)).await;
    finished(flows::DisplayMode::All, outcome)
}

fn finished(mode: flows::DisplayMode, outcome: FlowOutcome) -> bool {
    match outcome {
        FlowOutcome::Displayed { items } => {
            tracing::info!(section = mode.section().section_id(), items, "Flow finished");
            true
        }
        FlowOutcome::SubmitFailed | FlowOutcome::PollFailed => {
            tracing::warn!(?outcome, "Flow ended without content");
            false
        }
    }
}
