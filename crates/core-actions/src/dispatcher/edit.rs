//! Text edit action handling (insert/backspace/delete/newline, delete line).
//!
//! Insert pairs brackets and quotes: typing an opener also inserts its closer
//! and leaves the cursor between them, typing a closer that already sits right
//! of the cursor steps over it, and Backspace on an opener removes the closer
//! that immediately follows.

use super::DispatchResult;
use crate::EditKind;
use core_model::View;
use core_state::{EditorState, Mode};
use core_text::Position;

/// Closing counterpart of an auto-paired opener.
fn closer_for(b: u8) -> Option<u8> {
    match b {
        b'(' => Some(b')'),
        b'[' => Some(b']'),
        b'{' => Some(b'}'),
        b'<' => Some(b'>'),
        b'"' => Some(b'"'),
        b'\'' => Some(b'\''),
        _ => None,
    }
}

fn is_closer(b: u8) -> bool {
    matches!(b, b')' | b']' | b'}' | b'>' | b'"' | b'\'')
}

fn byte_at(state: &EditorState, pos: Position) -> Option<u8> {
    state.document.line(pos.line)?.chars().get(pos.byte).copied()
}

pub(crate) fn handle_edit(
    kind: EditKind,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    if state.mode != Mode::Insert {
        return DispatchResult::clean();
    }
    let before = view.cursor;
    match kind {
        EditKind::Insert(b) => insert_paired(state, &mut view.cursor, b),
        EditKind::Backspace => {
            backspace_paired(state, &mut view.cursor);
        }
        EditKind::DeleteForward => {
            let cursor = &mut view.cursor;
            let doc = &state.document;
            if cursor.byte < doc.line_len(cursor.line) {
                cursor.byte += 1;
            } else if cursor.line + 1 < doc.line_count() {
                cursor.line += 1;
                cursor.byte = 0;
            } else {
                return DispatchResult::clean();
            }
            state.document.delete_char(cursor);
        }
        EditKind::Newline => state.document.insert_newline(&mut view.cursor),
    }
    tracing::trace!(target: "actions.dispatch", op="edit", kind=?kind, line=before.line, byte=before.byte, to_line=view.cursor.line, to_byte=view.cursor.byte, "edit");
    DispatchResult::dirty()
}

fn insert_paired(state: &mut EditorState, cursor: &mut Position, b: u8) {
    if is_closer(b) && byte_at(state, *cursor) == Some(b) {
        cursor.byte += 1;
        return;
    }
    state.document.insert_char(cursor, b);
    if let Some(close) = closer_for(b) {
        let mut after = *cursor;
        state.document.insert_char(&mut after, close);
    }
}

fn backspace_paired(state: &mut EditorState, cursor: &mut Position) -> Option<u8> {
    let deleted = state.document.delete_char(cursor)?;
    if let Some(close) = closer_for(deleted)
        && byte_at(state, *cursor) == Some(close)
    {
        let mut after = Position::new(cursor.line, cursor.byte + 1);
        state.document.delete_char(&mut after);
    }
    Some(deleted)
}

/// Ctrl-D: remove the cursor line and park the cursor at the end of the line
/// above (or of the new first line).
pub(crate) fn delete_line(state: &mut EditorState, view: &mut View) -> DispatchResult {
    let doc = &mut state.document;
    let at = view.cursor.line;
    doc.delete_line(at);
    let line = at.saturating_sub(1).min(doc.line_count().saturating_sub(1));
    view.cursor = Position::new(line, doc.line_len(line));
    tracing::trace!(target: "actions.dispatch", op="delete_line", line=at, to_line=view.cursor.line, "edit");
    DispatchResult::dirty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_state::Document;
    use pretty_assertions::assert_eq;

    fn insert_state(text: &[u8]) -> EditorState {
        let mut st = EditorState::new(Document::from_bytes(text));
        st.mode = Mode::Insert;
        st
    }

    fn line(st: &EditorState, idx: usize) -> String {
        String::from_utf8_lossy(st.document.line(idx).unwrap().chars()).into_owned()
    }

    fn type_bytes(st: &mut EditorState, view: &mut View, bytes: &[u8]) {
        for &b in bytes {
            handle_edit(EditKind::Insert(b), st, view);
        }
    }

    #[test]
    fn opener_inserts_closer_with_cursor_between() {
        let mut st = insert_state(b"");
        let mut v = View::default();
        type_bytes(&mut st, &mut v, b"(");
        assert_eq!(line(&st, 0), "()");
        assert_eq!(v.cursor, Position::new(0, 1));
    }

    #[test]
    fn closer_types_over_existing_closer() {
        let mut st = insert_state(b"");
        let mut v = View::default();
        type_bytes(&mut st, &mut v, b"()");
        assert_eq!(line(&st, 0), "()");
        assert_eq!(v.cursor, Position::new(0, 2));
    }

    #[test]
    fn closer_at_column_zero_types_over() {
        let mut st = insert_state(b")\n");
        let mut v = View::default();
        type_bytes(&mut st, &mut v, b")");
        assert_eq!(line(&st, 0), ")");
        assert_eq!(v.cursor, Position::new(0, 1));
    }

    #[test]
    fn closer_at_column_one_without_match_is_inserted() {
        let mut st = insert_state(b"x\n");
        let mut v = View::new(Position::new(0, 1));
        type_bytes(&mut st, &mut v, b"]");
        assert_eq!(line(&st, 0), "x]");
        assert_eq!(v.cursor, Position::new(0, 2));
    }

    #[test]
    fn quotes_pair_and_skip() {
        let mut st = insert_state(b"");
        let mut v = View::default();
        type_bytes(&mut st, &mut v, b"\"hi\"");
        assert_eq!(line(&st, 0), "\"hi\"");
        assert_eq!(v.cursor, Position::new(0, 4));
    }

    #[test]
    fn backspace_removes_pair() {
        let mut st = insert_state(b"");
        let mut v = View::default();
        type_bytes(&mut st, &mut v, b"a{");
        assert_eq!(line(&st, 0), "a{}");
        handle_edit(EditKind::Backspace, &mut st, &mut v);
        assert_eq!(line(&st, 0), "a");
        assert_eq!(v.cursor, Position::new(0, 1));
    }

    #[test]
    fn backspace_keeps_unrelated_right_neighbor() {
        let mut st = insert_state(b"(x\n");
        let mut v = View::new(Position::new(0, 1));
        handle_edit(EditKind::Backspace, &mut st, &mut v);
        assert_eq!(line(&st, 0), "x");
    }

    #[test]
    fn backspace_at_line_start_joins() {
        let mut st = insert_state(b"ab\ncd\n");
        let mut v = View::new(Position::new(1, 0));
        handle_edit(EditKind::Backspace, &mut st, &mut v);
        assert_eq!(st.document.line_count(), 1);
        assert_eq!(line(&st, 0), "abcd");
        assert_eq!(v.cursor, Position::new(0, 2));
    }

    #[test]
    fn backspace_at_origin_is_noop() {
        let mut st = insert_state(b"ab\n");
        let mut v = View::default();
        handle_edit(EditKind::Backspace, &mut st, &mut v);
        assert_eq!(line(&st, 0), "ab");
        assert!(!st.document.is_dirty());
    }

    #[test]
    fn delete_forward_removes_right_and_joins_at_end() {
        let mut st = insert_state(b"ab\ncd\n");
        let mut v = View::new(Position::new(0, 0));
        handle_edit(EditKind::DeleteForward, &mut st, &mut v);
        assert_eq!(line(&st, 0), "b");
        assert_eq!(v.cursor, Position::new(0, 0));

        let mut v = View::new(Position::new(0, 1));
        handle_edit(EditKind::DeleteForward, &mut st, &mut v);
        assert_eq!(line(&st, 0), "bcd");
        assert_eq!(v.cursor, Position::new(0, 1));

        let mut v = View::new(Position::new(0, 3));
        let r = handle_edit(EditKind::DeleteForward, &mut st, &mut v);
        assert!(!r.dirty);
        assert_eq!(line(&st, 0), "bcd");
    }

    #[test]
    fn newline_splits_line() {
        let mut st = insert_state(b"abcd\n");
        let mut v = View::new(Position::new(0, 2));
        handle_edit(EditKind::Newline, &mut st, &mut v);
        assert_eq!(line(&st, 0), "ab");
        assert_eq!(line(&st, 1), "cd");
        assert_eq!(v.cursor, Position::new(1, 0));
    }

    #[test]
    fn edits_ignored_in_normal_mode() {
        let mut st = EditorState::new(Document::from_bytes(b"ab\n"));
        let mut v = View::default();
        let r = handle_edit(EditKind::Insert(b'x'), &mut st, &mut v);
        assert!(!r.dirty);
        assert_eq!(line(&st, 0), "ab");
    }

    #[test]
    fn delete_line_moves_to_end_of_previous() {
        let mut st = EditorState::new(Document::from_bytes(b"one\ntwo\nthree\n"));
        let mut v = View::new(Position::new(1, 1));
        delete_line(&mut st, &mut v);
        assert_eq!(st.document.line_count(), 2);
        assert_eq!(line(&st, 1), "three");
        assert_eq!(v.cursor, Position::new(0, 3));

        let mut v = View::new(Position::new(0, 0));
        delete_line(&mut st, &mut v);
        assert_eq!(line(&st, 0), "three");
        assert_eq!(v.cursor, Position::new(0, 5));
    }

    #[test]
    fn delete_only_line_leaves_empty_document() {
        let mut st = EditorState::new(Document::from_bytes(b"solo\n"));
        let mut v = View::new(Position::new(0, 2));
        delete_line(&mut st, &mut v);
        assert_eq!(st.document.line_count(), 1);
        assert_eq!(line(&st, 0), "");
        assert_eq!(v.cursor, Position::origin());
    }
}
