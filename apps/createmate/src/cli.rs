//! Command-line interface.

use clap::{Args, Parser, Subcommand};

use createmate_core::domain::{FeedbackForm, UserInputForm};

#[derive(Parser, Debug)]
#[command(name = "createmate")]
#[command(version)]
#[command(about = "Submit content preferences and watch the generated posts arrive")]
pub struct Cli {
    /// Base URL of the CreateMate API (overrides CREATEMATE_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Submit preferences, then wait for the first generated post
    Submit(UserInputArgs),
    /// Submit feedback, then wait for every generated post
    Feedback(FeedbackArgs),
    /// Submit preferences, then feedback, showing content after each
    Run {
        #[command(flatten)]
        input: UserInputArgs,
        #[command(flatten)]
        feedback: FeedbackArgs,
    },
    /// Print the current state once
    State,
    /// Check that the API is up
    Health,
}

/// Fields of the user-input form, taken as typed.
#[derive(Args, Debug, Clone)]
pub struct UserInputArgs {
    #[arg(long)]
    pub area_of_interest: String,

    #[arg(long)]
    pub content_type: String,

    /// Comma-separated keywords
    #[arg(long, default_value = "")]
    pub keywords: String,

    /// Posts per week
    #[arg(long)]
    pub post_frequency: String,
}

/// Fields of the feedback form, taken as typed.
#[derive(Args, Debug, Clone)]
pub struct FeedbackArgs {
    /// "true" if the first post was liked; anything else counts as not liked
    #[arg(long, default_value = "true")]
    pub liked: String,

    #[arg(long, default_value = "")]
    pub comments: String,
}

impl From<&UserInputArgs> for UserInputForm {
    fn from(args: &UserInputArgs) -> Self {
        UserInputForm {
            area_of_interest: args.area_of_interest.clone(),
            content_type: args.content_type.clone(),
            keywords: args.keywords.clone(),
            post_frequency: args.post_frequency.clone(),
        }
    }
}

impl From<&FeedbackArgs> for FeedbackForm {
    fn from(args: &FeedbackArgs) -> Self {
        FeedbackForm {
            liked: args.liked.clone(),
            comments: args.comments.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_args_become_form() {
        let cli = Cli::try_parse_from([
            "createmate",
            "submit",
            "--area-of-interest",
            "tech",
            "--content-type",
            "blog",
            "--keywords",
            "ai, ml",
            "--post-frequency",
            "3",
        ])
        .unwrap();

        let Command::Submit(args) = cli.command else {
            panic!("expected submit");
        };
        let input = UserInputForm::from(&args).coerce().unwrap();
        assert_eq!(input.keywords, vec!["ai", "ml"]);
        assert_eq!(input.post_frequency, 3);
    }

    #[test]
    fn test_run_takes_both_forms_and_global_url() {
        let cli = Cli::try_parse_from([
            "createmate",
            "run",
            "--api-url",
            "http://api.local:8000",
            "--area-of-interest",
            "Technology",
            "--content-type",
            "Event Updates",
            "--keywords",
            "Ethereum",
            "--post-frequency",
            "3",
            "--liked",
            "false",
            "--comments",
            "Shorter please",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("http://api.local:8000"));
        let Command::Run { input, feedback } = cli.command else {
            panic!("expected run");
        };
        assert_eq!(input.content_type, "Event Updates");
        assert!(!FeedbackForm::from(&feedback).coerce().liked);
    }

    #[test]
    fn test_feedback_defaults() {
        let cli = Cli::try_parse_from(["createmate", "feedback"]).unwrap();
        let Command::Feedback(args) = cli.command else {
            panic!("expected feedback");
        };
        let feedback = FeedbackForm::from(&args).coerce();
        assert!(feedback.liked);
        assert!(feedback.comments.is_empty());
    }
}
