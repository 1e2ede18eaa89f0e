//! Render transform: tab expansion and byte-offset <-> display-column mapping.
//!
//! Every function here is pure and walks the raw line bytes left to right. A tab
//! advances the display column to the next multiple of [`TAB_STOP`]; any other
//! byte advances it by one.

/// Display width of a tab stop.
pub const TAB_STOP: usize = 2;

#[inline]
fn advance(col: usize, b: u8) -> usize {
    if b == b'\t' {
        col + (TAB_STOP - 1) - (col % TAB_STOP) + 1
    } else {
        col + 1
    }
}

/// Display column reached after walking `chars[..cx]`. `cx` past the end is clamped.
pub fn cx_to_rx(chars: &[u8], cx: usize) -> usize {
    let end = cx.min(chars.len());
    chars[..end].iter().fold(0, |col, &b| advance(col, b))
}

/// Inverse of [`cx_to_rx`]: the first byte index whose post-advance column exceeds `rx`,
/// or `chars.len()` when `rx` lies past the rendered line.
pub fn rx_to_cx(chars: &[u8], rx: usize) -> usize {
    let mut col = 0;
    for (cx, &b) in chars.iter().enumerate() {
        col = advance(col, b);
        if col > rx {
            return cx;
        }
    }
    chars.len()
}

/// Expand tabs to spaces up to the next tab stop. All other bytes pass through.
pub fn expand_tabs(chars: &[u8]) -> Vec<u8> {
    let tabs = chars.iter().filter(|&&b| b == b'\t').count();
    let mut out = Vec::with_capacity(chars.len() + tabs * (TAB_STOP - 1));
    for &b in chars {
        if b == b'\t' {
            out.push(b' ');
            while out.len() % TAB_STOP != 0 {
                out.push(b' ');
            }
        } else {
            out.push(b);
        }
    }
    out
}
