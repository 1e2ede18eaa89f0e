//! Frame output.
//!
//! A composed frame is written with a single `write_all` followed by one flush
//! so the terminal never shows a half-drawn screen.

use anyhow::Result;
use std::io::{Write, stdout};

pub fn write_frame<W: Write>(out: &mut W, frame: &[u8]) -> Result<()> {
    out.write_all(frame)?;
    out.flush()?;
    Ok(())
}

/// Write a frame to the locked process stdout.
pub fn flush_frame(frame: &[u8]) -> Result<()> {
    let mut out = stdout().lock();
    write_frame(&mut out, frame)
}
