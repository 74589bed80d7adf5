//! The two submit-then-poll flows and the pieces they share.

mod content;
mod feedback;
mod submit;
mod user_input;

pub use content::DisplayMode;
pub use feedback::submit_feedback;
pub use user_input::submit_user_input;

/// How a flow ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Content was rendered and its section revealed.
    Displayed { items: usize },
    /// The submission was rejected or never sent; nothing was polled.
    SubmitFailed,
    /// Polling gave up before any content appeared.
    PollFailed,
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use createmate_core::render::HtmlRenderer;
    use createmate_infra::{HtmlPage, InMemoryContentApi, RecordingNotifier};

    use crate::context::AppContext;

    pub struct Harness {
        pub api: Arc<InMemoryContentApi>,
        pub notices: Arc<RecordingNotifier>,
        pub page: Arc<HtmlPage>,
        pub ctx: AppContext,
    }

    pub fn harness() -> Harness {
        let api = Arc::new(InMemoryContentApi::new());
        let notices = Arc::new(RecordingNotifier::new());
        let page = Arc::new(HtmlPage::new());
        let ctx = AppContext::new(
            api.clone(),
            notices.clone(),
            page.clone(),
            Arc::new(HtmlRenderer),
        );
        Harness {
            api,
            notices,
            page,
            ctx,
        }
    }
}
