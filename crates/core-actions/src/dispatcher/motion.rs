//! Cursor movement.
//!
//! Horizontal moves wrap across line boundaries: Left at column 0 lands at the
//! end of the previous line, Right past the end lands at the start of the next.
//! Vertical moves keep the byte column and clamp it to the target line.
//! Paging jumps relative to the current scroll offset; the next scroll pass
//! re-anchors the viewport around the new cursor.

use super::DispatchResult;
use crate::MotionKind;
use core_model::{Layout, View};
use core_state::EditorState;

pub(crate) fn handle_motion(
    kind: MotionKind,
    state: &mut EditorState,
    view: &mut View,
    layout: &Layout,
) -> DispatchResult {
    let doc = &state.document;
    let before = view.cursor;
    let last_line = doc.line_count().saturating_sub(1);
    let cursor = &mut view.cursor;
    match kind {
        MotionKind::Left => {
            if cursor.byte > 0 {
                cursor.byte -= 1;
            } else if cursor.line > 0 {
                cursor.line -= 1;
                cursor.byte = doc.line_len(cursor.line);
            }
        }
        MotionKind::Right => {
            if cursor.byte < doc.line_len(cursor.line) {
                cursor.byte += 1;
            } else if cursor.line < last_line {
                cursor.line += 1;
                cursor.byte = 0;
            }
        }
        MotionKind::Up => cursor.line = cursor.line.saturating_sub(1),
        MotionKind::Down => cursor.line = (cursor.line + 1).min(last_line),
        MotionKind::LineStart => cursor.byte = 0,
        MotionKind::LineEnd => cursor.byte = doc.line_len(cursor.line),
        MotionKind::PageUp => cursor.line = view.rowoff.min(last_line),
        MotionKind::PageDown => {
            let bottom = view.rowoff + layout.text_rows().saturating_sub(1);
            cursor.line = bottom.min(last_line);
        }
        MotionKind::LastLine => {
            cursor.line = last_line;
            cursor.byte = 0;
        }
    }
    doc.clamp(cursor);
    tracing::trace!(target: "actions.dispatch", op="motion", kind=?kind, from_line=before.line, from_byte=before.byte, to_line=cursor.line, to_byte=cursor.byte, "motion");
    if *cursor != before {
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_state::Document;
    use core_text::Position;

    fn run(text: &[u8], at: Position, kind: MotionKind) -> Position {
        let mut state = EditorState::new(Document::from_bytes(text));
        let mut view = View::new(at);
        let layout = Layout::new(80, 12, false);
        handle_motion(kind, &mut state, &mut view, &layout);
        view.cursor
    }

    #[test]
    fn left_wraps_to_previous_line_end() {
        assert_eq!(
            run(b"abc\nde\n", Position::new(1, 0), MotionKind::Left),
            Position::new(0, 3)
        );
        assert_eq!(
            run(b"abc\n", Position::new(0, 0), MotionKind::Left),
            Position::new(0, 0)
        );
    }

    #[test]
    fn right_wraps_to_next_line_start() {
        assert_eq!(
            run(b"abc\nde\n", Position::new(0, 3), MotionKind::Right),
            Position::new(1, 0)
        );
        assert_eq!(
            run(b"abc\nde\n", Position::new(1, 2), MotionKind::Right),
            Position::new(1, 2)
        );
    }

    #[test]
    fn vertical_moves_clamp_column() {
        assert_eq!(
            run(b"abcdef\nde\n", Position::new(0, 5), MotionKind::Down),
            Position::new(1, 2)
        );
        assert_eq!(
            run(b"abc\nde\n", Position::new(1, 1), MotionKind::Down),
            Position::new(1, 1)
        );
        assert_eq!(
            run(b"abc\nde\n", Position::new(0, 1), MotionKind::Up),
            Position::new(0, 1)
        );
    }

    #[test]
    fn page_down_targets_last_visible_row() {
        let text: Vec<u8> = (0..40).flat_map(|i| format!("{i}\n").into_bytes()).collect();
        // 12 rows minus status and message bars -> 10 text rows.
        assert_eq!(
            run(&text, Position::new(0, 0), MotionKind::PageDown),
            Position::new(9, 0)
        );
        assert_eq!(
            run(b"a\nb\n", Position::new(0, 0), MotionKind::PageDown),
            Position::new(1, 0)
        );
    }

    #[test]
    fn page_up_targets_first_visible_row() {
        let mut state = EditorState::new(Document::from_bytes(b"a\nb\nc\nd\ne\n"));
        let mut view = View::new(Position::new(4, 0));
        view.rowoff = 2;
        handle_motion(
            MotionKind::PageUp,
            &mut state,
            &mut view,
            &Layout::new(80, 5, false),
        );
        assert_eq!(view.cursor, Position::new(2, 0));
    }

    #[test]
    fn line_start_end_and_last_line() {
        assert_eq!(
            run(b"abc\nde\n", Position::new(0, 1), MotionKind::LineEnd),
            Position::new(0, 3)
        );
        assert_eq!(
            run(b"abc\nde\n", Position::new(0, 2), MotionKind::LineStart),
            Position::new(0, 0)
        );
        assert_eq!(
            run(b"abc\nde\n", Position::new(0, 2), MotionKind::LastLine),
            Position::new(1, 0)
        );
    }
}
