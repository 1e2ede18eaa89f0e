//! Per-line syntax classifier.
//!
//! The classifier looks at one rendered line at a time and carries no state across
//! lines. It recognises quoted strings (with `\` / `%` escapes), numeric literals
//! (decimal, fractional, `0x` hex), `*` and bracket glyphs. Everything else is
//! [`Highlight::Normal`].
//!
//! [`Highlight::Match`] is never produced here; it is an overlay applied by search.

/// Highlight category of a single rendered byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    Normal,
    Number,
    Brace,
    Star,
    String,
    Match,
    Escape,
}

impl Highlight {
    /// SGR foreground code used when drawing this category.
    pub fn color(self) -> u8 {
        match self {
            Highlight::Number => 31,
            Highlight::String | Highlight::Escape => 32,
            Highlight::Brace => 33,
            Highlight::Match => 34,
            Highlight::Star => 35,
            Highlight::Normal => 37,
        }
    }

    /// Escape sequences are drawn in the string color plus italics.
    pub fn is_italic(self) -> bool {
        matches!(self, Highlight::Escape)
    }
}

/// Token boundary test used by numeric literal detection.
pub fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0 || b == 0x0b || b",.()+-/*=~%<>[];".contains(&b)
}

fn is_quote(b: u8) -> bool {
    b == b'"' || b == b'\''
}

fn is_brace(b: u8) -> bool {
    b"()[]{}<>".contains(&b)
}

/// Classify every byte of `render`. The result has exactly `render.len()` entries.
pub fn classify(render: &[u8]) -> Vec<Highlight> {
    let len = render.len();
    let mut hl = vec![Highlight::Normal; len];

    let mut prev_sep = true;
    let mut prev_byte = 0u8;
    let mut open_quote: Option<u8> = None;

    let mut i = 0;
    while i < len {
        let c = render[i];
        let prev_hl = if i > 0 { hl[i - 1] } else { Highlight::Normal };

        if is_quote(c) {
            hl[i] = Highlight::String;
            match open_quote {
                Some(q) if q == c => open_quote = None,
                None => open_quote = Some(c),
                Some(_) => {}
            }
        } else if open_quote.is_some() {
            hl[i] = Highlight::String;
            if (c == b'\\' || c == b'%') && i + 1 < len {
                hl[i] = Highlight::Escape;
                i += 1;
                hl[i] = Highlight::Escape;
                if c == b'\\' && render[i] == b'x' {
                    let end = (i + 2).min(len - 1);
                    for slot in &mut hl[i + 1..=end] {
                        *slot = Highlight::Escape;
                    }
                    i = end;
                }
            }
        } else if (c.is_ascii_digit() && (prev_sep || prev_hl == Highlight::Number))
            || (c == b'.' && prev_hl == Highlight::Number)
            || (c.is_ascii_hexdigit() && prev_hl == Highlight::Number)
            || (c == b'x' && prev_byte == b'0' && prev_hl == Highlight::Number)
        {
            hl[i] = Highlight::Number;
        } else if c == b'*' {
            hl[i] = Highlight::Star;
        } else if is_brace(c) {
            hl[i] = Highlight::Brace;
        }

        prev_sep = is_separator(render[i]);
        prev_byte = render[i];
        i += 1;
    }
    hl
}
