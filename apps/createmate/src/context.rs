//! Application context - the collaborators every flow works against.

use std::path::PathBuf;
use std::sync::Arc;

use createmate_core::ports::{ContentApi, ContentView, Notice, Notifier};
use createmate_core::render::{HtmlRenderer, Renderer, TextRenderer};
use createmate_infra::{ConsoleNotifier, FanoutNotifier, HtmlPage, PollPolicy, TerminalView};

use crate::config::{AppConfig, FollowUpDelays};

/// Shared application context.
#[derive(Clone)]
pub struct AppContext {
    pub api: Arc<dyn ContentApi>,
    pub notifier: Arc<dyn Notifier>,
    pub view: Arc<dyn ContentView>,
    pub renderer: Arc<dyn Renderer>,
    pub poll: PollPolicy,
    pub delays: FollowUpDelays,
    page_out: Option<(Arc<HtmlPage>, PathBuf)>,
}

impl AppContext {
    /// Wire collaborators with default timing.
    pub fn new(
        api: Arc<dyn ContentApi>,
        notifier: Arc<dyn Notifier>,
        view: Arc<dyn ContentView>,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        Self {
            api,
            notifier,
            view,
            renderer,
            poll: PollPolicy::default(),
            delays: FollowUpDelays::default(),
            page_out: None,
        }
    }

    /// Build the context the binary runs with.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let api = Self::build_api(config)?;

        #[cfg_attr(not(feature = "http"), allow(unused_mut))]
        let mut targets: Vec<Arc<dyn Notifier>> = vec![Arc::new(ConsoleNotifier)];
        if let Some(url) = &config.alert_webhook_url {
            #[cfg(feature = "http")]
            {
                tracing::info!("Alert webhook configured");
                targets.push(Arc::new(createmate_infra::WebhookNotifier::new(url.clone())));
            }
            #[cfg(not(feature = "http"))]
            tracing::warn!(url = %url, "Alert webhook ignored: built without http feature");
        }
        let notifier: Arc<dyn Notifier> = Arc::new(FanoutNotifier::new(targets));

        let mut ctx = match &config.html_out {
            Some(path) => {
                let page = Arc::new(HtmlPage::new());
                let mut ctx = Self::new(api, notifier, page.clone(), Arc::new(HtmlRenderer));
                ctx.page_out = Some((page, path.clone()));
                ctx
            }
            None => Self::new(
                api,
                notifier,
                Arc::new(TerminalView::stdout()),
                Arc::new(TextRenderer),
            ),
        };
        ctx.poll = config.poll.clone();
        ctx.delays = config.delays.clone();

        Ok(ctx)
    }

    #[cfg(feature = "http")]
    fn build_api(config: &AppConfig) -> anyhow::Result<Arc<dyn ContentApi>> {
        let api = createmate_infra::HttpContentApi::new(config.api.clone())?;
        tracing::info!(base_url = %api.base_url(), "Using content API");
        Ok(Arc::new(api))
    }

    #[cfg(not(feature = "http"))]
    fn build_api(_config: &AppConfig) -> anyhow::Result<Arc<dyn ContentApi>> {
        tracing::warn!("Built without http feature - using in-memory content API");
        Ok(Arc::new(createmate_infra::InMemoryContentApi::new()))
    }

    /// Show a notice. Delivery failures are logged, never raised.
    pub async fn notify(&self, notice: Notice) {
        if let Err(e) = self.notifier.notify(notice).await {
            tracing::warn!(error = %e, "Failed to deliver notice");
        }
    }

    /// Write the HTML page, when the context renders to one.
    pub fn persist_page(&self) -> std::io::Result<()> {
        match &self.page_out {
            Some((page, path)) => page.write_to(path),
            None => Ok(()),
        }
    }
}
