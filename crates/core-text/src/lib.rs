//! Line storage, the render transform and the per-line syntax classifier.
//!
//! Text is byte oriented: a line is a `Vec<u8>` with no trailing newline. The
//! rendered form expands tabs; the highlight vector is positionally aligned with
//! the rendered form.

pub mod highlight;
pub mod line;
pub mod render;

pub use highlight::Highlight;
pub use line::Line;
pub use render::TAB_STOP;

/// A position inside a document expressed as (line index, byte offset within that line).
/// `byte` may equal the line length, meaning "after the last byte".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub byte: usize,
}

impl Position {
    pub fn new(line: usize, byte: usize) -> Self {
        Self { line, byte }
    }
    pub fn origin() -> Self {
        Self { line: 0, byte: 0 }
    }
    pub fn clamp_to<F>(&mut self, line_count: usize, mut line_len_fn: F)
    where
        F: FnMut(usize) -> usize,
    {
        if line_count == 0 {
            self.line = 0;
            self.byte = 0;
            return;
        }
        if self.line >= line_count {
            self.line = line_count - 1;
        }
        let max_len = line_len_fn(self.line);
        if self.byte > max_len {
            self.byte = max_len;
        }
    }
}
