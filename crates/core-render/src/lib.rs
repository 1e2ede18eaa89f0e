//! Screen rendering.
//!
//! The editor redraws the whole screen after every handled event:
//! - `compose`: builds the frame bytes (text rows, status bar, message bar,
//!   cursor placement) from an `EditorModel`.
//! - `status`: status bar segments and their fitting into the screen width.
//! - `style`: highlight category to terminal style mapping.
//! - `writer`: single-write, single-flush output.

pub mod compose;
pub mod status;
pub mod style;
pub mod writer;

pub use compose::compose_frame;
pub use writer::{flush_frame, write_frame};

use anyhow::Result;
use core_model::EditorModel;

/// Compose and emit one frame to stdout.
pub fn render(model: &EditorModel) -> Result<()> {
    let frame = compose_frame(model)?;
    flush_frame(&frame)
}
