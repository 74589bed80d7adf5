use serde::{Deserialize, Serialize};

/// One generated post as the server reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub day: String,
    pub topic: String,
    pub content: String,
}

impl ContentItem {
    pub fn new(day: impl Into<String>, topic: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            topic: topic.into(),
            content: content.into(),
        }
    }
}

/// Snapshot of the shared state resource.
///
/// The client never mutates this; every poll reads a fresh copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub generated_content: Vec<ContentItem>,
    pub user_input: Option<serde_json::Value>,
    pub schedule: Option<serde_json::Value>,
    pub suggested_topics: Option<Vec<String>>,
}

impl AppState {
    pub fn with_content(items: Vec<ContentItem>) -> Self {
        Self {
            generated_content: items,
            ..Self::default()
        }
    }

    pub fn has_content(&self) -> bool {
        !self.generated_content.is_empty()
    }
}
