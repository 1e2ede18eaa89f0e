//! Full-frame composition.
//!
//! Every refresh rebuilds the whole screen into one byte buffer:
//! cursor hide + home, one line per text row (gutter, styled slice of the
//! rendered line, clear-to-EOL, CRLF), the inverse-video status bar, the bold
//! message bar, then the cursor move and cursor show. Style escapes are only
//! emitted where the highlight category changes.

use crate::status::{StatusContext, compose_status, fit_status, format_status};
use crate::style::{RunStyle, ansi_color};
use anyhow::Result;
use core_model::EditorModel;
use core_text::{Highlight, Line};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::time::Instant;

/// Compose the complete frame for the model's current scroll state.
///
/// Call `EditorModel::scroll` first so `rx` and the offsets match the cursor.
pub fn compose_frame(model: &EditorModel) -> Result<Vec<u8>> {
    let started = Instant::now();
    let state = model.state();
    let view = model.view();
    let layout = model.layout();
    let doc = &state.document;
    let width = usize::from(layout.width);
    let gutter = usize::from(layout.gutter);
    let cols = layout.text_cols();

    let mut out = Vec::with_capacity(width.max(1) * usize::from(layout.height.max(1)) * 2);
    queue!(out, Hide, MoveTo(0, 0))?;

    for y in 0..layout.text_rows() {
        let filerow = view.rowoff + y;
        if let Some(line) = doc.line(filerow) {
            if gutter > 0 {
                queue_gutter(&mut out, filerow, filerow == view.cursor.line, gutter)?;
            }
            queue_line(&mut out, line, view.coloff, cols)?;
        }
        queue!(out, Clear(ClearType::UntilNewLine), Print("\r\n"))?;
    }

    let ctx = StatusContext {
        file_name: doc.file_name.as_deref(),
        dirty: doc.is_dirty(),
        line_count: doc.line_count(),
        mode: state.mode,
        line: view.cursor.line,
        col: view.rx,
    };
    let (left, right) = format_status(&compose_status(&ctx));
    queue!(
        out,
        SetAttribute(Attribute::Reverse),
        Print(fit_status(&left, &right, width)),
        SetAttribute(Attribute::Reset),
        Print("\r\n")
    )?;

    let now = Instant::now();
    let message = match &state.prompt {
        Some(prompt) => prompt.display(),
        None => state
            .ephemeral_status
            .as_ref()
            .filter(|m| m.expires_at > now)
            .map(|m| m.text.clone())
            .unwrap_or_default(),
    };
    let clipped: String = message.chars().take(width).collect();
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Clear(ClearType::UntilNewLine),
        Print(clipped),
        SetAttribute(Attribute::Reset)
    )?;

    let row = view.cursor.line.saturating_sub(view.rowoff);
    let col = view.rx.saturating_sub(view.coloff) + gutter;
    queue!(out, MoveTo(to_u16(col), to_u16(row)), Show)?;

    tracing::trace!(
        target: "render",
        bytes = out.len(),
        micros = started.elapsed().as_micros() as u64,
        "frame_composed"
    );
    Ok(out)
}

fn to_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

/// `%5d|`, drawn in the brace color on the cursor line, clipped to `gutter`.
fn queue_gutter(out: &mut Vec<u8>, filerow: usize, current: bool, gutter: usize) -> Result<()> {
    let label: String = format!("{:>5}|", filerow + 1).chars().take(gutter).collect();
    if current {
        queue!(
            out,
            SetForegroundColor(ansi_color(Highlight::Brace.color())),
            Print(label),
            SetForegroundColor(Color::Reset)
        )?;
    } else {
        queue!(out, Print(label))?;
    }
    Ok(())
}

/// The visible slice `[coloff, coloff + cols)` of `line`, with style changes at
/// category boundaries only.
fn queue_line(out: &mut Vec<u8>, line: &Line, coloff: usize, cols: usize) -> Result<()> {
    let render = line.render();
    let hl = line.highlight();
    let start = coloff.min(render.len());
    let end = coloff.saturating_add(cols).min(render.len());

    let mut current = RunStyle::DEFAULT;
    let mut run_start = start;
    for i in start..end {
        let style = RunStyle::of(hl.get(i).copied().unwrap_or_default());
        if style != current {
            queue_visible(out, &render[run_start..i])?;
            transition(out, current, style)?;
            current = style;
            run_start = i;
        }
    }
    queue_visible(out, &render[run_start..end])?;
    transition(out, current, RunStyle::DEFAULT)
}

/// Copy `bytes` to the frame, drawing C0 controls and DEL as a reverse-video
/// `^X` letter (`@`..`_`, `?` for DEL) so they occupy exactly one column.
fn queue_visible(out: &mut Vec<u8>, bytes: &[u8]) -> Result<()> {
    let mut plain = 0;
    for (i, &b) in bytes.iter().enumerate() {
        let symbol = match b {
            0..=0x1f => b'@' + b,
            0x7f => b'?',
            _ => continue,
        };
        out.extend_from_slice(&bytes[plain..i]);
        queue!(
            out,
            SetAttribute(Attribute::Reverse),
            Print(char::from(symbol)),
            SetAttribute(Attribute::NoReverse)
        )?;
        plain = i + 1;
    }
    out.extend_from_slice(&bytes[plain..]);
    Ok(())
}

fn transition(out: &mut Vec<u8>, from: RunStyle, to: RunStyle) -> Result<()> {
    if from.italic && !to.italic {
        queue!(out, SetAttribute(Attribute::NoItalic))?;
    }
    if to.italic && !from.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if from.fg != to.fg {
        queue!(out, SetForegroundColor(to.fg.unwrap_or(Color::Reset)))?;
    }
    Ok(())
}
