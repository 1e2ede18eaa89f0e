//! Incremental search.
//!
//! Each keystroke in the search prompt first removes the previous match
//! overlay, then decides where to scan from: arrow keys continue from the last
//! match in their direction, anything else (typing, deleting) restarts from the
//! top going forward. The scan visits every line once, wrapping around.

use crate::PromptKey;
use core_model::View;
use core_state::{Document, SearchDirection, SearchState};
use core_text::{Highlight, Position};

/// Find the next line containing `query`, starting after `last_match` in
/// `direction` and wrapping around the document.
///
/// Returns the line index and the match offset within that line's rendered
/// form. With no previous match a forward scan starts at line 0 and a
/// backward scan at the last line.
pub fn find_next(
    doc: &Document,
    query: &[u8],
    last_match: Option<usize>,
    direction: SearchDirection,
) -> Option<(usize, usize)> {
    let n = doc.line_count();
    if query.is_empty() || n == 0 {
        return None;
    }
    let mut current = last_match.map(|c| c.min(n - 1));
    for _ in 0..n {
        let next = match (current, direction) {
            (None, SearchDirection::Forward) => 0,
            (None, SearchDirection::Backward) => n - 1,
            (Some(c), SearchDirection::Forward) => (c + 1) % n,
            (Some(c), SearchDirection::Backward) => (c + n - 1) % n,
        };
        current = Some(next);
        if let Some(col) = doc.find_in_line(next, query) {
            return Some((next, col));
        }
    }
    None
}

/// React to one prompt key. The query is the prompt text after the key was
/// applied to it.
pub(crate) fn on_key(
    search: &mut SearchState,
    query: &[u8],
    key: PromptKey,
    doc: &mut Document,
    view: &mut View,
) {
    if let Some(saved) = search.saved_highlight.take() {
        doc.restore_highlight(saved);
    }
    match key {
        PromptKey::Confirm | PromptKey::Cancel => {
            search.last_match = None;
            search.direction = SearchDirection::Forward;
            return;
        }
        PromptKey::Forward => search.direction = SearchDirection::Forward,
        PromptKey::Backward => search.direction = SearchDirection::Backward,
        PromptKey::Insert(_) | PromptKey::Backspace | PromptKey::Other => {
            search.last_match = None;
            search.direction = SearchDirection::Forward;
        }
    }
    if search.last_match.is_none() {
        search.direction = SearchDirection::Forward;
    }

    let Some((line, col)) = find_next(doc, query, search.last_match, search.direction) else {
        tracing::trace!(target: "actions.dispatch", op="search", found=false);
        return;
    };
    search.last_match = Some(line);
    let byte = doc.line(line).map_or(0, |l| l.rx_to_cx(col));
    view.cursor = Position::new(line, byte);
    // Past the end: the next scroll pass re-anchors around the match.
    view.rowoff = doc.line_count();
    search.saved_highlight = doc.overlay_highlight(line, col, query.len(), Highlight::Match);
    tracing::trace!(target: "actions.dispatch", op="search", found=true, line, byte);
}
