//! Message-bar prompts.
//!
//! A prompt owns the keyboard until it is confirmed (Return with non-empty
//! text) or cancelled (Escape). While open, the search prompt re-runs the
//! search after every key; the other kinds only act on confirm or cancel.

use super::{DispatchResult, command, search};
use crate::{PromptKey, PromptRequest};
use core_model::View;
use core_state::{EditorState, Prompt, PromptKind, SearchState};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Confirmed,
    Cancelled,
}

pub(crate) fn start(
    request: PromptRequest,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    let kind = match request {
        PromptRequest::Search => PromptKind::Search(SearchState::default()),
        PromptRequest::GotoLine => PromptKind::GotoLine,
    };
    open(kind, state, view)
}

/// Open a prompt, remembering the view it was opened from.
pub(crate) fn open(kind: PromptKind, state: &mut EditorState, view: &View) -> DispatchResult {
    tracing::trace!(target: "actions.dispatch", op="prompt_open", label=kind.label());
    state.prompt = Some(Prompt::new(kind, view.snapshot()));
    DispatchResult::dirty()
}

pub(crate) fn handle_key(key: PromptKey, state: &mut EditorState, view: &mut View) -> DispatchResult {
    let Some(mut prompt) = state.prompt.take() else {
        return DispatchResult::clean();
    };
    let outcome = match key {
        PromptKey::Insert(b) => {
            prompt.push(b);
            None
        }
        PromptKey::Backspace => {
            prompt.pop();
            None
        }
        PromptKey::Cancel => Some(Outcome::Cancelled),
        PromptKey::Confirm if !prompt.input().is_empty() => Some(Outcome::Confirmed),
        PromptKey::Confirm | PromptKey::Forward | PromptKey::Backward | PromptKey::Other => None,
    };

    let query = prompt.input().as_bytes().to_vec();
    if let PromptKind::Search(search_state) = &mut prompt.kind {
        search::on_key(search_state, &query, key, &mut state.document, view);
    }

    match outcome {
        None => state.prompt = Some(prompt),
        Some(outcome) => finish(prompt, outcome, state, view),
    }
    DispatchResult::dirty()
}

fn finish(prompt: Prompt, outcome: Outcome, state: &mut EditorState, view: &mut View) {
    tracing::trace!(target: "actions.dispatch", op="prompt_close", label=prompt.kind.label(), outcome=?outcome);
    state.ephemeral_status = None;
    match (&prompt.kind, outcome) {
        (PromptKind::SaveAs, Outcome::Confirmed) => {
            let path = PathBuf::from(prompt.input());
            state.document.file_name = Some(path.clone());
            command::save_to(state, &path);
        }
        (PromptKind::SaveAs, Outcome::Cancelled) => state.set_status("Save aborted"),
        (PromptKind::GotoLine, Outcome::Confirmed) => goto_line(prompt.input(), state, view),
        (PromptKind::GotoLine, Outcome::Cancelled) => {}
        (PromptKind::Search(_), Outcome::Confirmed) => {}
        (PromptKind::Search(_), Outcome::Cancelled) => view.restore(prompt.origin),
    }
}

/// Jump to a 1-based line number taken from the leading digits of `input`.
fn goto_line(input: &str, state: &mut EditorState, view: &mut View) {
    let digits: String = input
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    let Ok(number) = digits.parse::<usize>() else {
        state.set_status(format!("Invalid line number: {input}"));
        return;
    };
    let doc = &state.document;
    let line = number
        .saturating_sub(1)
        .min(doc.line_count().saturating_sub(1));
    view.cursor.line = line;
    view.cursor.byte = view.cursor.byte.min(doc.line_len(line));
}
