//! Mapping from highlight categories to terminal styles.
//!
//! Categories carry classic ANSI foreground codes (30-37); they are expressed
//! here as the equivalent crossterm palette colors. `Normal` text uses the
//! terminal's default foreground and needs no escape at all.

use core_text::Highlight;
use crossterm::style::Color;

/// Foreground and italic flag for one run of same-category bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunStyle {
    pub fg: Option<Color>,
    pub italic: bool,
}

impl RunStyle {
    pub const DEFAULT: RunStyle = RunStyle {
        fg: None,
        italic: false,
    };

    pub fn of(h: Highlight) -> Self {
        if h == Highlight::Normal {
            return Self::DEFAULT;
        }
        Self {
            fg: Some(ansi_color(h.color())),
            italic: h.is_italic(),
        }
    }
}

/// Palette color for an ANSI foreground code; unknown codes fall back to white.
pub fn ansi_color(code: u8) -> Color {
    match code {
        30 => Color::Black,
        31 => Color::DarkRed,
        32 => Color::DarkGreen,
        33 => Color::DarkYellow,
        34 => Color::DarkBlue,
        35 => Color::DarkMagenta,
        36 => Color::DarkCyan,
        _ => Color::Grey,
    }
}
