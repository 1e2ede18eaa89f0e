//! Core event types consumed by the editor loop.
//!
//! Keys arrive already decoded into logical codes; terminal escape sequence
//! parsing is the input collaborator's job. Control-modified letters keep their
//! letter in `KeyCode::Char` with `KeyModifiers::CTRL` set; callers that think in
//! raw control bytes use [`KeyEvent::control_byte`].

/// Top-level event enum consumed by the central event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Input(InputEvent),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    /// Terminal resize (columns, rows).
    Resize(u16, u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

/// KeyCode enumerates normalized logical key representations consumed by higher layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A single byte (printable ASCII, or a letter when combined with CTRL).
    Char(u8),
    Enter,
    Esc,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Delete,
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const CTRL = 0b0000_0001;
        const ALT  = 0b0000_0010;
        const SHIFT= 0b0000_0100;
    }
}

/// Control byte for an ASCII letter, e.g. `ctrl(b'q') == 0x11`.
pub const fn ctrl(b: u8) -> u8 {
    b & 0x1f
}

impl KeyEvent {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    /// Unmodified key.
    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    /// Unmodified byte key.
    pub fn byte(b: u8) -> Self {
        Self::plain(KeyCode::Char(b))
    }

    /// Ctrl + letter.
    pub fn ctrl(b: u8) -> Self {
        Self::new(KeyCode::Char(b), KeyModifiers::CTRL)
    }

    /// The raw byte this key would produce on a classic terminal: control letters
    /// fold to `letter & 0x1f`, Enter/Tab/Esc/Backspace to their ASCII codes.
    /// Named navigation keys have no byte form.
    pub fn control_byte(&self) -> Option<u8> {
        match self.code {
            KeyCode::Char(b) if self.mods.contains(KeyModifiers::CTRL) => Some(ctrl(b)),
            KeyCode::Char(b) => Some(b),
            KeyCode::Enter => Some(b'\r'),
            KeyCode::Tab => Some(b'\t'),
            KeyCode::Esc => Some(0x1b),
            KeyCode::Backspace => Some(0x7f),
            _ => None,
        }
    }
}
