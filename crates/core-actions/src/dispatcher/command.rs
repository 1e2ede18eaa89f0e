//! Quit confirmation and saving.

use super::{DispatchResult, prompt};
use crate::io_ops;
use core_model::View;
use core_state::{EditorState, PromptKind};
use std::path::Path;

pub(crate) fn handle_quit(state: &mut EditorState) -> DispatchResult {
    match state.press_quit() {
        None => {
            tracing::info!(target: "actions.dispatch", op="quit", dirty=state.document.is_dirty(), "quit");
            DispatchResult::quit()
        }
        Some(remaining) => {
            state.set_status(format!(
                "WARNING! File has unsaved changes. Press Ctrl-Q {remaining} more time(s) to quit."
            ));
            tracing::trace!(target: "actions.dispatch", op="quit_blocked", remaining);
            DispatchResult::dirty()
        }
    }
}

/// Save to the known file name, or ask for one first.
pub(crate) fn handle_save(state: &mut EditorState, view: &mut View) -> DispatchResult {
    match state.document.file_name.clone() {
        Some(path) => save_to(state, &path),
        None => prompt::open(PromptKind::SaveAs, state, view),
    }
}

pub(crate) fn save_to(state: &mut EditorState, path: &Path) -> DispatchResult {
    match io_ops::write_document(&mut state.document, path) {
        Ok(n) => state.set_status(format!("{n} bytes written to disk")),
        Err(e) => state.set_status(format!("Can't save! I/O error: {e}")),
    }
    DispatchResult::dirty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_state::Document;

    fn dirty_state() -> EditorState {
        let mut doc = Document::new();
        doc.insert_line(0, b"x");
        EditorState::new(doc)
    }

    fn status(st: &EditorState) -> &str {
        st.ephemeral_status.as_ref().map_or("", |m| m.text.as_str())
    }

    #[test]
    fn dirty_quit_warns_with_remaining_count() {
        let mut st = dirty_state();
        let r = handle_quit(&mut st);
        assert!(!r.quit);
        assert_eq!(
            status(&st),
            "WARNING! File has unsaved changes. Press Ctrl-Q 2 more time(s) to quit."
        );
        assert!(!handle_quit(&mut st).quit);
        assert!(handle_quit(&mut st).quit);
    }

    #[test]
    fn save_without_name_opens_prompt() {
        let mut st = dirty_state();
        let mut view = View::default();
        handle_save(&mut st, &mut view);
        let prompt = st.prompt.as_ref().expect("save-as prompt");
        assert!(matches!(prompt.kind, PromptKind::SaveAs));
    }

    #[test]
    fn save_with_name_writes_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.txt");
        let mut st = dirty_state();
        st.document.file_name = Some(path.clone());
        let mut view = View::default();
        handle_save(&mut st, &mut view);
        assert_eq!(status(&st), "3 bytes written to disk");
        assert!(!st.document.is_dirty());
        assert_eq!(std::fs::read(&path).unwrap(), b"x\n\n");
    }

    #[test]
    fn save_failure_keeps_document_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let mut st = dirty_state();
        st.document.file_name = Some(dir.path().to_path_buf());
        let mut view = View::default();
        handle_save(&mut st, &mut view);
        assert!(status(&st).starts_with("Can't save! I/O error: "));
        assert!(st.document.is_dirty());
    }
}
