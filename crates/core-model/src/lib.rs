//! High-level editor model: state, the single view, and screen layout.
//!
//! A `View` owns presentation state (cursor, derived display column, scroll
//! offsets). `EditorState` owns the document and modal state. Keeping them apart
//! lets the dispatcher borrow both mutably at once through
//! [`EditorModel::split_state_and_view`].
//!
//! Core invariants (must hold after every public call that touches the cursor):
//! * `view.cursor.line < document.line_count()`.
//! * `view.cursor.byte <= document.line_len(view.cursor.line)`.
//! * After [`EditorModel::scroll`], `view.rx` is the display column of the cursor
//!   and the cursor cell lies inside the text region.

use core_state::{EditorState, ViewSnapshot};
use core_text::Position;

mod layout;
pub mod viewport;

pub use layout::{GUTTER_WIDTH, Layout, RESERVED_ROWS};
pub use viewport::{Offsets, compute_scroll};

/// Default rows kept between the cursor and the top/bottom edge.
pub const DEFAULT_SCROLL_PADDING: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub cursor: Position,
    /// Display column of the cursor, refreshed by `scroll`.
    pub rx: usize,
    pub rowoff: usize,
    pub coloff: usize,
}

impl View {
    pub fn new(cursor: Position) -> Self {
        Self {
            cursor,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            cursor: self.cursor,
            rowoff: self.rowoff,
            coloff: self.coloff,
        }
    }

    pub fn restore(&mut self, snap: ViewSnapshot) {
        self.cursor = snap.cursor;
        self.rowoff = snap.rowoff;
        self.coloff = snap.coloff;
    }
}

pub struct EditorModel {
    state: EditorState,
    view: View,
    layout: Layout,
    scroll_padding: usize,
}

impl EditorModel {
    pub fn new(state: EditorState, layout: Layout) -> Self {
        Self::with_view(View::default(), state, layout)
    }

    /// Test/helper constructor allowing an already prepared view to be injected.
    pub fn with_view(view: View, state: EditorState, layout: Layout) -> Self {
        let mut model = Self {
            state,
            view,
            layout,
            scroll_padding: DEFAULT_SCROLL_PADDING,
        };
        model.clamp_cursor();
        model
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }
    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }
    pub fn view(&self) -> &View {
        &self.view
    }
    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn set_layout(&mut self, layout: Layout) {
        tracing::debug!(target: "model", width = layout.width, height = layout.height, "layout_changed");
        self.layout = layout;
    }

    pub fn scroll_padding(&self) -> usize {
        self.scroll_padding
    }

    pub fn set_scroll_padding(&mut self, padding: usize) {
        self.scroll_padding = padding;
    }

    /// Disjoint mutable borrows of the state, the view and the (read-only) layout.
    pub fn split_state_and_view(&mut self) -> (&mut EditorState, &mut View, &Layout) {
        (&mut self.state, &mut self.view, &self.layout)
    }

    /// Re-clamp the cursor into the document.
    pub fn clamp_cursor(&mut self) {
        self.state.document.clamp(&mut self.view.cursor);
    }

    /// Refresh `rx` and the scroll offsets for the current cursor and layout.
    pub fn scroll(&mut self) {
        self.clamp_cursor();
        let doc = &self.state.document;
        let cursor = self.view.cursor;
        self.view.rx = doc.line(cursor.line).map_or(0, |l| l.cx_to_rx(cursor.byte));
        let next = compute_scroll(
            Offsets {
                rowoff: self.view.rowoff,
                coloff: self.view.coloff,
            },
            cursor.line,
            self.view.rx,
            doc.line_count(),
            self.layout.text_rows(),
            self.layout.text_cols(),
            self.scroll_padding,
        );
        self.view.rowoff = next.rowoff;
        self.view.coloff = next.coloff;
    }
}
