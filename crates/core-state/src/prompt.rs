//! Transient prompt state (save-as, goto-line, incremental search).
//!
//! A prompt exists only while it is being answered. The kind tag selects how each
//! keystroke is handled; search carries its own scan state and the view snapshot
//! restored on cancel.

use crate::document::SavedHighlight;
use core_text::Position;

/// Cursor and scroll offsets captured when a prompt opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewSnapshot {
    pub cursor: Position,
    pub rowoff: usize,
    pub coloff: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
    #[default]
    Forward,
    Backward,
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Line index of the last match, if any.
    pub last_match: Option<usize>,
    pub direction: SearchDirection,
    /// Highlight tags hidden under the current match overlay.
    pub saved_highlight: Option<SavedHighlight>,
}

#[derive(Debug, Clone)]
pub enum PromptKind {
    SaveAs,
    GotoLine,
    Search(SearchState),
}

impl PromptKind {
    pub fn label(&self) -> &'static str {
        match self {
            PromptKind::SaveAs => "Save as: ",
            PromptKind::GotoLine => "go to line: ",
            PromptKind::Search(_) => "Search: ",
        }
    }

    /// Maximum number of bytes accepted as input.
    pub fn max_len(&self) -> usize {
        match self {
            PromptKind::GotoLine => 16,
            PromptKind::SaveAs | PromptKind::Search(_) => 128,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    input: String,
    pub origin: ViewSnapshot,
}

impl Prompt {
    pub fn new(kind: PromptKind, origin: ViewSnapshot) -> Self {
        Self {
            kind,
            input: String::new(),
            origin,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Append a printable ASCII byte; returns false when rejected (non printable or full).
    pub fn push(&mut self, b: u8) -> bool {
        if !(0x20..0x7f).contains(&b) || self.input.len() >= self.kind.max_len() {
            return false;
        }
        self.input.push(b as char);
        true
    }

    pub fn pop(&mut self) -> Option<char> {
        self.input.pop()
    }

    /// Text shown on the message bar while the prompt is active.
    pub fn display(&self) -> String {
        format!("{}{}", self.kind.label(), self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_respects_max_len() {
        let mut p = Prompt::new(PromptKind::GotoLine, ViewSnapshot::default());
        for _ in 0..20 {
            p.push(b'9');
        }
        assert_eq!(p.input().len(), 16);
        assert!(!p.push(b'1'));
    }

    #[test]
    fn push_rejects_control_bytes() {
        let mut p = Prompt::new(PromptKind::SaveAs, ViewSnapshot::default());
        assert!(!p.push(0x1b));
        assert!(!p.push(b'\t'));
        assert!(p.push(b'a'));
        assert_eq!(p.display(), "Save as: a");
    }
}
