//! Scroll policy keeping the cursor visible with a row padding.
//!
//! Vertical: the cursor is kept at least `padding` rows away from the top and
//! bottom edges where the document allows it. Padding is clamped to
//! `(rows - 1) / 2` so a short screen can always satisfy it, and a final clamp
//! guarantees `rowoff <= cy < rowoff + rows`.
//!
//! Horizontal: one column of left context is kept when scrolling left; scrolling
//! right places the cursor on the last visible column.

/// Scroll offsets of a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offsets {
    pub rowoff: usize,
    pub coloff: usize,
}

/// Compute new offsets for cursor row `cy` and display column `rx`.
pub fn compute_scroll(
    current: Offsets,
    cy: usize,
    rx: usize,
    num_lines: usize,
    rows: usize,
    cols: usize,
    padding: usize,
) -> Offsets {
    let mut out = current;

    if rows > 0 {
        let pad = padding.min((rows - 1) / 2);
        if cy < out.rowoff + pad {
            out.rowoff = cy.saturating_sub(pad);
        }
        if cy + pad >= out.rowoff + rows && num_lines > rows {
            out.rowoff = (cy + 1 + pad).saturating_sub(rows).min(num_lines - rows);
        }
        out.rowoff = out.rowoff.min(num_lines.saturating_sub(rows));
        if cy < out.rowoff {
            out.rowoff = cy;
        } else if cy >= out.rowoff + rows {
            out.rowoff = cy + 1 - rows;
        }
    }

    if rx < out.coloff + 1 {
        out.coloff = rx.saturating_sub(1);
    }
    if cols > 0 && rx >= out.coloff + cols {
        out.coloff = rx + 1 - cols;
    }

    out
}
