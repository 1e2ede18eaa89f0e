//! Ordered line collection and every content mutation.
//!
//! All index arguments are clamped; out of range requests degrade to no-ops
//! instead of panicking. `dirty` counts content-changing mutations since the
//! last load or save.

use core_text::{Highlight, Line, Position};
use std::path::PathBuf;

/// Highlight tags of one line saved before an overlay was painted over them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedHighlight {
    pub line: usize,
    pub highlight: Vec<Highlight>,
}

#[derive(Debug, Clone)]
pub struct Document {
    lines: Vec<Line>,
    pub dirty: usize,
    pub file_name: Option<PathBuf>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty document: exactly one empty line, clean.
    pub fn new() -> Self {
        Self {
            lines: vec![Line::default()],
            dirty: 0,
            file_name: None,
        }
    }

    /// Build a document from raw file bytes. The result is clean.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut doc = Self::new();
        doc.load(bytes);
        doc
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, idx: usize) -> Option<&Line> {
        self.lines.get(idx)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Byte length of line `idx`, 0 when out of range.
    pub fn line_len(&self, idx: usize) -> usize {
        self.lines.get(idx).map_or(0, Line::len)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    /// Clamp `pos` into the document so it addresses an existing line and a valid
    /// byte offset (one past the end allowed).
    pub fn clamp(&self, pos: &mut Position) {
        pos.clamp_to(self.lines.len(), |i| self.line_len(i));
    }

    pub fn insert_line(&mut self, at: usize, text: &[u8]) {
        let at = at.min(self.lines.len());
        self.lines.insert(at, Line::new(text));
        self.dirty += 1;
    }

    /// Remove line `at`. A document never becomes empty: removing the last line
    /// leaves a single empty line behind.
    pub fn delete_line(&mut self, at: usize) {
        if at >= self.lines.len() {
            return;
        }
        self.lines.remove(at);
        self.dirty += 1;
        if self.lines.is_empty() {
            self.lines.push(Line::default());
        }
    }

    /// Insert `ch` at the cursor and advance it. A cursor one line past the end
    /// appends a fresh line first.
    pub fn insert_char(&mut self, pos: &mut Position, ch: u8) {
        if pos.line >= self.lines.len() {
            pos.line = self.lines.len();
            self.lines.push(Line::default());
        }
        let line = &mut self.lines[pos.line];
        pos.byte = pos.byte.min(line.len());
        line.insert(pos.byte, ch);
        pos.byte += 1;
        self.dirty += 1;
    }

    /// Delete the byte left of the cursor. At column 0 the line is joined onto the
    /// previous one and `b'\n'` is returned. `None` at the start of the document.
    pub fn delete_char(&mut self, pos: &mut Position) -> Option<u8> {
        self.clamp(pos);
        if pos.byte == 0 {
            if pos.line == 0 {
                return None;
            }
            let removed = self.lines.remove(pos.line);
            pos.line -= 1;
            let prev = &mut self.lines[pos.line];
            pos.byte = prev.len();
            prev.append(removed.chars());
            self.dirty += 1;
            return Some(b'\n');
        }
        pos.byte -= 1;
        let removed = self.lines[pos.line].remove(pos.byte);
        self.dirty += 1;
        removed
    }

    /// Split the current line at the cursor (or open an empty line above when the
    /// cursor is at column 0). The cursor lands at column 0 of the following line.
    pub fn insert_newline(&mut self, pos: &mut Position) {
        self.clamp(pos);
        if pos.byte == 0 {
            self.insert_line(pos.line, b"");
        } else {
            let tail = self.lines[pos.line].split_off(pos.byte);
            self.insert_line(pos.line + 1, &tail);
        }
        pos.line += 1;
        pos.byte = 0;
    }

    /// Lines joined by `\n`, with a trailing newline after the last one.
    pub fn serialize(&self) -> Vec<u8> {
        let total: usize = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for line in &self.lines {
            out.extend_from_slice(line.chars());
            out.push(b'\n');
        }
        out
    }

    /// Replace the content with `bytes`, split on `\n`. Trailing `\r` is stripped
    /// from each line and a final newline does not produce an extra empty line.
    pub fn load(&mut self, bytes: &[u8]) {
        self.lines.clear();
        let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
        if !bytes.is_empty() {
            for raw in body.split(|&b| b == b'\n') {
                let mut end = raw.len();
                while end > 0 && (raw[end - 1] == b'\r' || raw[end - 1] == b'\n') {
                    end -= 1;
                }
                self.lines.push(Line::new(&raw[..end]));
            }
        }
        if self.lines.is_empty() {
            self.lines.push(Line::default());
        }
        self.dirty = 0;
    }

    /// Byte offset of `query` within the rendered form of line `idx`.
    pub fn find_in_line(&self, idx: usize, query: &[u8]) -> Option<usize> {
        if query.is_empty() {
            return None;
        }
        let render = self.lines.get(idx)?.render();
        render.windows(query.len()).position(|w| w == query)
    }

    /// Paint `kind` over `[start, start+len)` of line `idx`'s highlight tags and
    /// return the tags that were there before. The span is clamped to the line.
    pub fn overlay_highlight(
        &mut self,
        idx: usize,
        start: usize,
        len: usize,
        kind: Highlight,
    ) -> Option<SavedHighlight> {
        let line = self.lines.get_mut(idx)?;
        let saved = SavedHighlight {
            line: idx,
            highlight: line.highlight().to_vec(),
        };
        let hl = line.highlight_mut();
        let end = start.saturating_add(len).min(hl.len());
        let start = start.min(end);
        for slot in &mut hl[start..end] {
            *slot = kind;
        }
        Some(saved)
    }

    /// Put back tags captured by [`Document::overlay_highlight`]. Ignored when the
    /// line disappeared or changed length in the meantime.
    pub fn restore_highlight(&mut self, saved: SavedHighlight) {
        if let Some(line) = self.lines.get_mut(saved.line) {
            let hl = line.highlight_mut();
            if hl.len() == saved.highlight.len() {
                hl.copy_from_slice(&saved.highlight);
            }
        }
    }
}
