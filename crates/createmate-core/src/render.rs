//! Renderers for generated content.
//!
//! The HTML renderer inserts server text as-is, without escaping. Content
//! from an untrusted source can therefore inject markup into the page.

use crate::domain::ContentItem;

/// Turns content items into the markup a view displays.
pub trait Renderer: Send + Sync {
    /// A single item.
    fn render_item(&self, item: &ContentItem) -> String;

    /// Every item, in order.
    fn render_list(&self, items: &[ContentItem]) -> String;
}

/// HTML fragments for a browser page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    fn fields(item: &ContentItem) -> String {
        format!(
            "<p><strong>Day:</strong> {}</p>\n\
             <p><strong>Topic:</strong> {}</p>\n\
             <p><strong>Content:</strong></p>\n\
             <p>{}</p>\n",
            item.day, item.topic, item.content
        )
    }
}

impl Renderer for HtmlRenderer {
    fn render_item(&self, item: &ContentItem) -> String {
        Self::fields(item)
    }

    fn render_list(&self, items: &[ContentItem]) -> String {
        items
            .iter()
            .map(|item| {
                format!(
                    "<div class=\"content-item\">\n{}<hr>\n</div>\n",
                    Self::fields(item)
                )
            })
            .collect()
    }
}

/// Plain text for a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render_item(&self, item: &ContentItem) -> String {
        format!(
            "Day: {}\nTopic: {}\nContent:\n{}\n",
            item.day, item.topic, item.content
        )
    }

    fn render_list(&self, items: &[ContentItem]) -> String {
        items
            .iter()
            .map(|item| self.render_item(item))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
