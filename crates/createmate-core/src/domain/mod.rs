//! Domain entities - what the client sends and what it reads back.

mod content;
mod feedback;
mod user_input;

pub use content::{AppState, ContentItem};
pub use feedback::{Feedback, FeedbackForm};
pub use user_input::{UserInput, UserInputForm};
