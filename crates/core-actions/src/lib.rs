//! Editor actions: the vocabulary produced by key translation and consumed by
//! the dispatcher.
//!
//! The runtime feeds each key through [`handle_key`], which translates it for
//! the current mode (or the open prompt), keeps the quit countdown honest, and
//! applies the resulting action to the model.

pub mod dispatcher;
pub mod io_ops;
pub mod key_translator;

pub use dispatcher::{DispatchResult, dispatch};
pub use io_ops::{IoError, load_document, write_document};
pub use key_translator::translate_key;

use core_events::KeyEvent;
use core_model::EditorModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Save,
    Motion(MotionKind),
    /// Remove the cursor line entirely.
    DeleteLine,
    ModeChange(ModeChange),
    Edit(EditKind),
    StartPrompt(PromptRequest),
    /// A key delivered to the open prompt.
    Prompt(PromptKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
    /// First column of the last line.
    LastLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    /// `i`
    EnterInsert,
    /// `a`
    InsertAfter,
    /// `A`
    AppendLineEnd,
    /// `o`
    OpenBelow,
    /// `O`
    OpenAbove,
    /// `;` terminates the line with a semicolon unless it already ends in one.
    AppendSemicolon,
    LeaveInsert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    Insert(u8),
    Backspace,
    DeleteForward,
    Newline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptRequest {
    Search,
    GotoLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKey {
    Insert(u8),
    Backspace,
    Confirm,
    Cancel,
    /// Right/Down: search the next match.
    Forward,
    /// Left/Up: search the previous match.
    Backward,
    Other,
}

/// Translate and apply one key press.
///
/// Keys that translate to nothing still count as "some other key" for the
/// quit countdown.
pub fn handle_key(model: &mut EditorModel, key: &KeyEvent) -> DispatchResult {
    let state = model.state();
    let action = translate_key(state.mode, state.is_prompting(), key);
    if action != Some(Action::Quit) {
        model.state_mut().reset_quit();
    }
    match action {
        Some(action) => dispatch(action, model),
        None => DispatchResult::clean(),
    }
}
