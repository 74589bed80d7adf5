use serde::{Deserialize, Serialize};

/// Reaction to the first generated post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub liked: bool,
    pub comments: String,
}

/// Raw feedback fields, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct FeedbackForm {
    pub liked: String,
    pub comments: String,
}

impl FeedbackForm {
    /// Only the exact string `"true"` counts as liked.
    pub fn coerce(&self) -> Feedback {
        Feedback {
            liked: self.liked == "true",
            comments: self.comments.clone(),
        }
    }
}
