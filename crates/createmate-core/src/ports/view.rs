//! View port - the display sections content is rendered into.

/// A hidden-until-revealed display area with one content container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// First generated post, shown after the user-input flow.
    GeneratedContent,
    /// Every generated post, shown after the feedback flow.
    AllContent,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::GeneratedContent, Section::AllContent];

    pub fn section_id(self) -> &'static str {
        match self {
            Section::GeneratedContent => "generated-content-section",
            Section::AllContent => "all-content-section",
        }
    }

    pub fn container_id(self) -> &'static str {
        match self {
            Section::GeneratedContent => "generated-content",
            Section::AllContent => "all-generated-content",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::GeneratedContent => "Generated Content",
            Section::AllContent => "All Generated Content",
        }
    }
}

/// Trait for display targets. Sections start hidden.
pub trait ContentView: Send + Sync {
    /// Replace the section container's contents with `markup`.
    fn replace(&self, section: Section, markup: String);

    /// Make the section visible.
    fn reveal(&self, section: Section);
}
