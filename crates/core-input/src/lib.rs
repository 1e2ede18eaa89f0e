//! Blocking input source backed by `crossterm::event::read`.
//!
//! crossterm already disambiguates escape sequences (arrows, Home/End, Page keys,
//! Delete) and a lone Escape; this crate only narrows its events down to the
//! logical keys the editor understands. Non-ASCII characters, mouse, focus and
//! paste events are dropped.

use anyhow::Result;
use core_events::{Event, InputEvent, KeyCode, KeyEvent, KeyModifiers};
use crossterm::event::{
    Event as CEvent, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind as CKind,
    KeyModifiers as CMods,
};

/// Block until the next event the editor cares about.
pub fn read_event() -> Result<Event> {
    loop {
        let raw = crossterm::event::read()?;
        if let Some(ev) = map_event(raw) {
            return Ok(ev);
        }
    }
}

/// Translate a crossterm event; `None` for events the editor ignores.
pub fn map_event(raw: CEvent) -> Option<Event> {
    match raw {
        CEvent::Key(key) => {
            let key = map_key_event(&key)?;
            tracing::trace!(target: "input.event", kind = "key", mods = ?key.mods, code_kind = code_kind_label(&key.code));
            Some(Event::Input(InputEvent::Key(key)))
        }
        CEvent::Resize(w, h) => {
            tracing::trace!(target: "input.event", w, h, "resize");
            Some(Event::Input(InputEvent::Resize(w, h)))
        }
        _ => None,
    }
}

pub(crate) fn map_key_event(key: &CKeyEvent) -> Option<KeyEvent> {
    if !matches!(key.kind, CKind::Press | CKind::Repeat) {
        return None;
    }
    let code = match key.code {
        CKeyCode::Char(ch) if ch.is_ascii() => KeyCode::Char(ch as u8),
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Tab => KeyCode::Tab,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        CKeyCode::Home => KeyCode::Home,
        CKeyCode::End => KeyCode::End,
        CKeyCode::PageUp => KeyCode::PageUp,
        CKeyCode::PageDown => KeyCode::PageDown,
        CKeyCode::Delete => KeyCode::Delete,
        _ => return None,
    };
    Some(KeyEvent::new(code, map_mods(key.modifiers)))
}

pub(crate) fn map_mods(m: CMods) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if m.contains(CMods::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if m.contains(CMods::ALT) {
        out |= KeyModifiers::ALT;
    }
    if m.contains(CMods::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}

fn code_kind_label(code: &KeyCode) -> &'static str {
    match code {
        KeyCode::Char(_) => "char",
        _ => "named",
    }
}
