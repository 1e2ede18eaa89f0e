//! Screen geometry.
//!
//! The terminal is split into three stacked bands: the text area, a one-row
//! status bar and a one-row message bar. When the line number gutter is on, the
//! leftmost `gutter` columns of the text area are reserved for it. Dimensions
//! may be 0 on a degenerate terminal but never underflow.

/// Rows reserved below the text area (status + message).
pub const RESERVED_ROWS: u16 = 2;
/// Width of the `%5d|` line number gutter.
pub const GUTTER_WIDTH: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u16,
    pub height: u16,
    pub gutter: u16,
}

impl Layout {
    pub fn new(width: u16, height: u16, line_numbers: bool) -> Self {
        let gutter = if line_numbers {
            GUTTER_WIDTH.min(width)
        } else {
            0
        };
        Self {
            width,
            height,
            gutter,
        }
    }

    /// Rows available for document text.
    pub fn text_rows(&self) -> usize {
        self.height.saturating_sub(RESERVED_ROWS) as usize
    }

    /// Columns available for document text (after the gutter).
    pub fn text_cols(&self) -> usize {
        self.width.saturating_sub(self.gutter) as usize
    }

    /// Same layout for a resized terminal.
    pub fn resized(&self, width: u16, height: u16) -> Self {
        Self::new(width, height, self.gutter > 0)
    }
}
