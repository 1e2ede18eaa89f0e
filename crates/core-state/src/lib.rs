//! Editor state: the document, the mode, prompt state and transient status.
//!
//! View concerns (cursor, scroll offsets) live in `core-model`; this crate stays
//! document-centric. All mutation of text flows through [`Document`].
//!
//! Quit confirmation:
//! - Quitting a clean document succeeds immediately.
//! - With unsaved changes the quit key must be pressed `quit_times` times in a
//!   row. Any other key resets the countdown (see [`EditorState::reset_quit`]).

pub mod document;
pub mod prompt;

pub use document::{Document, SavedHighlight};
pub use prompt::{Prompt, PromptKind, SearchDirection, SearchState, ViewSnapshot};

use std::time::{Duration, Instant};

/// Default number of consecutive quit presses required with unsaved changes.
pub const DEFAULT_QUIT_TIMES: usize = 3;
/// Default lifetime of a status message.
pub const DEFAULT_MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Current editor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation and single-key commands.
    #[default]
    Normal,
    /// Text entry at the cursor.
    Insert,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
        }
    }
}

/// Status message with an expiry instant.
#[derive(Debug, Clone)]
pub struct EphemeralMessage {
    pub text: String,
    pub expires_at: Instant,
}

/// Top-level editor state container.
pub struct EditorState {
    pub document: Document,
    pub mode: Mode,
    pub prompt: Option<Prompt>,
    pub ephemeral_status: Option<EphemeralMessage>,
    pub message_timeout: Duration,
    quit_times: usize,
    quit_remaining: usize,
}

impl EditorState {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            mode: Mode::Normal,
            prompt: None,
            ephemeral_status: None,
            message_timeout: DEFAULT_MESSAGE_TIMEOUT,
            quit_times: DEFAULT_QUIT_TIMES,
            quit_remaining: DEFAULT_QUIT_TIMES,
        }
    }

    /// Apply configured quit confirmation count and message lifetime.
    pub fn configure(&mut self, quit_times: usize, message_timeout: Duration) {
        self.quit_times = quit_times.max(1);
        self.quit_remaining = self.quit_times;
        self.message_timeout = message_timeout;
    }

    /// Set a status message that expires after the configured timeout.
    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        let ttl = self.message_timeout;
        self.set_ephemeral(msg, ttl);
    }

    /// Set an ephemeral status message with an explicit timeout duration.
    pub fn set_ephemeral<S: Into<String>>(&mut self, msg: S, ttl: Duration) {
        self.ephemeral_status = Some(EphemeralMessage {
            text: msg.into(),
            expires_at: Instant::now() + ttl,
        });
    }

    /// Tick ephemeral status; returns true if message expired and was cleared.
    pub fn tick_ephemeral(&mut self) -> bool {
        if let Some(m) = &self.ephemeral_status
            && Instant::now() >= m.expires_at
        {
            self.ephemeral_status = None;
            return true;
        }
        false
    }

    /// Record one quit key press. Returns `Some(remaining)` when more presses are
    /// needed, `None` when the editor may exit.
    pub fn press_quit(&mut self) -> Option<usize> {
        if !self.document.is_dirty() {
            return None;
        }
        self.quit_remaining = self.quit_remaining.saturating_sub(1);
        if self.quit_remaining == 0 {
            None
        } else {
            Some(self.quit_remaining)
        }
    }

    /// Any key other than quit restarts the countdown.
    pub fn reset_quit(&mut self) {
        self.quit_remaining = self.quit_times;
    }

    pub fn is_prompting(&self) -> bool {
        self.prompt.is_some()
    }
}
