//! View implementations - an HTML page model and a terminal.

mod page;
mod terminal;

pub use page::HtmlPage;
pub use terminal::TerminalView;
