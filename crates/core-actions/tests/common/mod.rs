#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{DispatchResult, handle_key};
use core_events::{KeyCode, KeyEvent};
use core_model::{EditorModel, Layout};
use core_state::{Document, EditorState};

pub fn model_from(text: &str) -> EditorModel {
    model_sized(text, 80, 24)
}

pub fn model_sized(text: &str, width: u16, height: u16) -> EditorModel {
    let state = EditorState::new(Document::from_bytes(text.as_bytes()));
    EditorModel::new(state, Layout::new(width, height, false))
}

pub fn press(model: &mut EditorModel, key: KeyEvent) -> DispatchResult {
    let result = handle_key(model, &key);
    model.scroll();
    result
}

pub fn press_code(model: &mut EditorModel, code: KeyCode) -> DispatchResult {
    press(model, KeyEvent::plain(code))
}

pub fn press_ctrl(model: &mut EditorModel, letter: u8) -> DispatchResult {
    press(model, KeyEvent::ctrl(letter))
}

/// Feed each byte as an unmodified key press.
pub fn type_str(model: &mut EditorModel, text: &str) {
    for b in text.bytes() {
        press(model, KeyEvent::byte(b));
    }
}

pub fn lines(model: &EditorModel) -> Vec<String> {
    model
        .state()
        .document
        .lines()
        .iter()
        .map(|l| String::from_utf8_lossy(l.chars()).into_owned())
        .collect()
}

pub fn status_text(model: &EditorModel) -> Option<String> {
    model
        .state()
        .ephemeral_status
        .as_ref()
        .map(|m| m.text.clone())
}

pub fn cursor(model: &EditorModel) -> (usize, usize) {
    let c = model.view().cursor;
    (c.line, c.byte)
}
