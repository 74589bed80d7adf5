//! In-memory HTML page with the content sections.
//!
//! Mirrors the browser page the forms live on: each section is hidden until
//! revealed, and its container holds the last markup written to it.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{PoisonError, RwLock};

use createmate_core::ports::{ContentView, Section};

#[derive(Debug, Clone, Default)]
struct SectionState {
    visible: bool,
    markup: String,
}

#[derive(Default)]
pub struct HtmlPage {
    sections: RwLock<HashMap<Section, SectionState>>,
}

impl HtmlPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.read(section).visible
    }

    /// Current contents of the section's container.
    pub fn markup(&self, section: Section) -> String {
        self.read(section).markup
    }

    fn read(&self, section: Section) -> SectionState {
        self.sections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&section)
            .cloned()
            .unwrap_or_default()
    }

    fn update(&self, section: Section, f: impl FnOnce(&mut SectionState)) {
        let mut sections = self.sections.write().unwrap_or_else(PoisonError::into_inner);
        f(sections.entry(section).or_default());
    }

    /// The whole page as a standalone HTML document.
    pub fn to_document(&self) -> String {
        let mut html = String::from(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>CreateMate</title>\n</head>\n<body>\n",
        );

        for section in Section::ALL {
            let state = self.read(section);
            let display = if state.visible { "block" } else { "none" };
            html.push_str(&format!(
                "<section id=\"{}\" style=\"display: {}\">\n<h2>{}</h2>\n<div id=\"{}\">\n{}</div>\n</section>\n",
                section.section_id(),
                display,
                section.title(),
                section.container_id(),
                state.markup,
            ));
        }

        html.push_str("</body>\n</html>\n");
        html
    }

    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_document())?;
        tracing::info!(path = %path.display(), "Page written");
        Ok(())
    }
}

impl ContentView for HtmlPage {
    fn replace(&self, section: Section, markup: String) {
        self.update(section, |state| state.markup = markup);
    }

    fn reveal(&self, section: Section) {
        self.update(section, |state| state.visible = true);
    }
}
