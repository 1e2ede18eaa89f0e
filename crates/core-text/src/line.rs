use crate::highlight::{self, Highlight};
use crate::render;

/// One editable line. `render` and `highlight` are rebuilt from `chars` on every
/// mutation, so readers always observe a consistent triple.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    chars: Vec<u8>,
    render: Vec<u8>,
    highlight: Vec<Highlight>,
}

impl Line {
    pub fn new(chars: impl Into<Vec<u8>>) -> Self {
        let mut line = Self {
            chars: chars.into(),
            ..Self::default()
        };
        line.update();
        line
    }

    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    pub fn render(&self) -> &[u8] {
        &self.render
    }

    pub fn highlight(&self) -> &[Highlight] {
        &self.highlight
    }

    /// Mutable access to the highlight tags, used only for overlays that a later
    /// [`Line::update`] discards.
    pub fn highlight_mut(&mut self) -> &mut [Highlight] {
        &mut self.highlight
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn cx_to_rx(&self, cx: usize) -> usize {
        render::cx_to_rx(&self.chars, cx)
    }

    pub fn rx_to_cx(&self, rx: usize) -> usize {
        render::rx_to_cx(&self.chars, rx)
    }

    /// Insert `b` at `at` (clamped to the line end).
    pub fn insert(&mut self, at: usize, b: u8) {
        let at = at.min(self.chars.len());
        self.chars.insert(at, b);
        self.update();
    }

    /// Remove the byte at `at`; `None` when out of range.
    pub fn remove(&mut self, at: usize) -> Option<u8> {
        if at >= self.chars.len() {
            return None;
        }
        let b = self.chars.remove(at);
        self.update();
        Some(b)
    }

    pub fn append(&mut self, bytes: &[u8]) {
        self.chars.extend_from_slice(bytes);
        self.update();
    }

    /// Split at `at`, keeping the head and returning the tail bytes.
    pub fn split_off(&mut self, at: usize) -> Vec<u8> {
        let at = at.min(self.chars.len());
        let tail = self.chars.split_off(at);
        self.update();
        tail
    }

    /// Regenerate `render` and `highlight` from `chars`.
    pub fn update(&mut self) {
        self.render = render::expand_tabs(&self.chars);
        self.highlight = highlight::classify(&self.render);
    }
}
