//! Terminal view - prints a section when it is revealed.

use std::collections::{HashMap, HashSet};
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use createmate_core::ports::{ContentView, Section};

struct TerminalState<W> {
    out: W,
    markup: HashMap<Section, String>,
    revealed: HashSet<Section>,
}

/// Writes revealed sections to `W` (stdout by default).
///
/// Replacing the contents of an already revealed section prints it again.
pub struct TerminalView<W = io::Stdout> {
    state: Mutex<TerminalState<W>>,
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            state: Mutex::new(TerminalState {
                out,
                markup: HashMap::new(),
                revealed: HashSet::new(),
            }),
        }
    }

    pub fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .out
    }

    fn print(state: &mut TerminalState<W>, section: Section) {
        let body = state.markup.get(&section).cloned().unwrap_or_default();
        let result = writeln!(state.out, "== {} ==\n{}", section.title(), body)
            .and_then(|()| state.out.flush());
        if let Err(e) = result {
            tracing::warn!(section = section.section_id(), error = %e, "Terminal write failed");
        }
    }
}

impl<W: Write + Send> ContentView for TerminalView<W> {
    fn replace(&self, section: Section, markup: String) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.markup.insert(section, markup);
        if state.revealed.contains(&section) {
            Self::print(&mut state, section);
        }
    }

    fn reveal(&self, section: Section) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.revealed.insert(section) {
            Self::print(&mut state, section);
        }
    }
}
