//! Status bar composition.
//!
//! Two-stage pipeline:
//! 1. `compose_status` produces an ordered vector of `StatusSegment` items.
//! 2. `format_status` renders them into the left and right halves of the bar.
//!
//! Left: ` <name>[*] - <N> lines | <MODE>` where `<name>` is the file name as
//! given (first 20 chars) or `<unnamed>`. Right: `Ln <line>, Col <col> ` with
//! 1-based values. Fitting both halves into the screen width is the frame
//! composer's job (see [`fit_status`]).

use core_state::Mode;
use std::borrow::Cow;
use std::path::Path;

/// Longest file name prefix shown on the status bar.
pub const MAX_NAME_CHARS: usize = 20;

/// What the status bar needs to know about the editor.
pub struct StatusContext<'a> {
    pub file_name: Option<&'a Path>,
    pub dirty: bool,
    pub line_count: usize,
    pub mode: Mode,
    /// 0-based cursor line.
    pub line: usize,
    /// 0-based display column.
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    FileName(Cow<'a, str>),
    DirtyMarker,
    LineCount(usize),
    Mode(&'static str),
    Position { line_1: usize, col_1: usize },
}

pub fn compose_status<'a>(ctx: &StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    let name: Cow<'a, str> = match ctx.file_name {
        Some(p) => {
            let full = p.to_string_lossy();
            match full.char_indices().nth(MAX_NAME_CHARS) {
                Some((cut, _)) => Cow::Owned(full[..cut].to_string()),
                None => full,
            }
        }
        None => Cow::Borrowed("<unnamed>"),
    };
    let mut out = Vec::with_capacity(5);
    out.push(StatusSegment::FileName(name));
    if ctx.dirty {
        out.push(StatusSegment::DirtyMarker);
    }
    out.push(StatusSegment::LineCount(ctx.line_count));
    out.push(StatusSegment::Mode(ctx.mode.name()));
    out.push(StatusSegment::Position {
        line_1: ctx.line + 1,
        col_1: ctx.col + 1,
    });
    out
}

/// Render segments into `(left, right)` halves.
pub fn format_status(segments: &[StatusSegment<'_>]) -> (String, String) {
    use std::fmt::Write as _;
    let mut left = String::with_capacity(48);
    let mut right = String::with_capacity(16);
    for seg in segments {
        match seg {
            StatusSegment::FileName(name) => {
                left.push(' ');
                left.push_str(name);
            }
            StatusSegment::DirtyMarker => left.push('*'),
            StatusSegment::LineCount(n) => {
                let _ = write!(left, " - {n} lines");
            }
            StatusSegment::Mode(m) => {
                let _ = write!(left, " | {m}");
            }
            StatusSegment::Position { line_1, col_1 } => {
                let _ = write!(right, "Ln {line_1}, Col {col_1} ");
            }
        }
    }
    (left, right)
}

/// Lay both halves into exactly `width` columns: the left half is clipped, the
/// right half is right-aligned and only drawn when it fits after the left.
pub fn fit_status(left: &str, right: &str, width: usize) -> String {
    let mut bar: String = left.chars().take(width).collect();
    let used = bar.chars().count();
    let free = width - used;
    let right_len = right.chars().count();
    if right_len <= free {
        bar.extend(std::iter::repeat_n(' ', free - right_len));
        bar.push_str(right);
    } else {
        bar.extend(std::iter::repeat_n(' ', free));
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ctx(file_name: Option<&Path>, dirty: bool) -> StatusContext<'_> {
        StatusContext {
            file_name,
            dirty,
            line_count: 12,
            mode: Mode::Normal,
            line: 2,
            col: 0,
        }
    }

    #[test]
    fn unnamed_clean() {
        let segs = compose_status(&ctx(None, false));
        let (l, r) = format_status(&segs);
        assert_eq!(l, " <unnamed> - 12 lines | NORMAL");
        assert_eq!(r, "Ln 3, Col 1 ");
    }

    #[test]
    fn named_dirty_insert() {
        let mut c = ctx(Some(Path::new("main.rs")), true);
        c.mode = Mode::Insert;
        let (l, _) = format_status(&compose_status(&c));
        assert_eq!(l, " main.rs* - 12 lines | INSERT");
    }

    #[test]
    fn long_name_truncated_to_twenty_chars() {
        let p = Path::new("abcdefghijklmnopqrstuvwxyz.txt");
        let segs = compose_status(&ctx(Some(p), false));
        assert_eq!(
            segs[0],
            StatusSegment::FileName(Cow::Borrowed("abcdefghijklmnopqrst"))
        );
    }

    #[test]
    fn fit_right_aligns_when_room() {
        assert_eq!(fit_status(" a", "Ln 1, Col 1 ", 20), " a      Ln 1, Col 1 ");
    }

    #[test]
    fn fit_drops_right_half_when_crowded() {
        assert_eq!(fit_status(" abcdef", "Ln 1, Col 1 ", 10), " abcdef   ");
        assert_eq!(fit_status(" abcdefghijk", "R", 5), " abcd");
        assert_eq!(fit_status(" x", "R", 0), "");
    }
}
