//! Dispatcher applying `Action` to the editor model.
//!
//! Sub-modules:
//! * `motion`  - cursor movement
//! * `mode`    - mode transitions, including the `o`/`O`/`A`/`;` entry points
//! * `edit`    - text mutation with bracket and quote pairing
//! * `command` - quit confirmation and saving
//! * `prompt`  - prompt line editing for save-as, goto-line and search
//! * `search`  - incremental search scanning and match highlighting
//!
//! Every handler leaves the cursor inside the document.

use crate::Action;
use core_model::EditorModel;

mod command;
mod edit;
mod mode;
mod motion;
mod prompt;
mod search;

pub use search::find_next;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub dirty: bool,
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
}

/// Apply an action. `dirty` asks for a redraw, `quit` asks the runtime to exit.
pub fn dispatch(action: Action, model: &mut EditorModel) -> DispatchResult {
    let (state, view, layout) = model.split_state_and_view();
    let result = match action {
        Action::Quit => command::handle_quit(state),
        Action::Save => command::handle_save(state, view),
        Action::Motion(kind) => motion::handle_motion(kind, state, view, layout),
        Action::DeleteLine => edit::delete_line(state, view),
        Action::ModeChange(mc) => mode::handle_mode_change(mc, state, view),
        Action::Edit(kind) => edit::handle_edit(kind, state, view),
        Action::StartPrompt(request) => prompt::start(request, state, view),
        Action::Prompt(key) => prompt::handle_key(key, state, view),
    };
    model.clamp_cursor();
    result
}
