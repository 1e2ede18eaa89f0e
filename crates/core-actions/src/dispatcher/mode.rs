//! Mode transitions.
//!
//! Besides plain `i`/Escape, several NORMAL commands position the cursor (and
//! possibly edit) before switching to INSERT: `a`, `A`, `o`, `O` and `;`.

use super::DispatchResult;
use crate::ModeChange;
use core_model::View;
use core_state::{EditorState, Mode};

pub(crate) fn handle_mode_change(
    mc: ModeChange,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    let before = state.mode;
    let doc = &mut state.document;
    let cursor = &mut view.cursor;
    match mc {
        ModeChange::LeaveInsert => {
            state.mode = Mode::Normal;
            tracing::trace!(target: "actions.dispatch", op="mode_change", from=?before, to="Normal");
            return if before == Mode::Normal {
                DispatchResult::clean()
            } else {
                DispatchResult::dirty()
            };
        }
        ModeChange::EnterInsert => {}
        ModeChange::InsertAfter => {
            cursor.byte = (cursor.byte + 1).min(doc.line_len(cursor.line));
        }
        ModeChange::AppendLineEnd => cursor.byte = doc.line_len(cursor.line),
        ModeChange::OpenBelow => {
            cursor.byte = doc.line_len(cursor.line);
            doc.insert_newline(cursor);
        }
        ModeChange::OpenAbove => {
            cursor.byte = 0;
            doc.insert_newline(cursor);
            cursor.line -= 1;
        }
        ModeChange::AppendSemicolon => {
            let chars = doc.line(cursor.line).map(|l| l.chars()).unwrap_or_default();
            let ends_with_semicolon = chars.last() == Some(&b';');
            cursor.byte = chars.len();
            if !ends_with_semicolon {
                doc.insert_char(cursor, b';');
            }
        }
    }
    state.mode = Mode::Insert;
    tracing::trace!(target: "actions.dispatch", op="mode_change", from=?before, to="Insert", kind=?mc, line=view.cursor.line, byte=view.cursor.byte);
    DispatchResult::dirty()
}
