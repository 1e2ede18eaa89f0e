mod common;

use common::*;
use core_actions::dispatcher::find_next;
use core_events::KeyCode;
use core_state::{Document, SearchDirection};
use core_text::Highlight;
use pretty_assertions::assert_eq;

#[test]
fn forward_search_from_last_line_wraps_to_first() {
    let doc = Document::from_bytes(b"target\nother\nmore\n");
    assert_eq!(
        find_next(&doc, b"target", Some(2), SearchDirection::Forward),
        Some((0, 0))
    );
}

#[test]
fn slash_search_jumps_and_highlights() {
    let mut m = model_from("alpha\nbeta\ngamma\n");
    type_str(&mut m, "/mm");
    assert_eq!(cursor(&m), (2, 2));
    let prompt = m.state().prompt.as_ref().expect("search prompt open");
    assert_eq!(prompt.display(), "Search: mm");
    let hl = m.state().document.line(2).unwrap().highlight();
    assert_eq!(&hl[2..4], &[Highlight::Match, Highlight::Match]);
    press_code(&mut m, KeyCode::Enter);
    assert!(m.state().prompt.is_none());
    assert_eq!(cursor(&m), (2, 2));
    assert!(
        m.state()
            .document
            .line(2)
            .unwrap()
            .highlight()
            .iter()
            .all(|h| *h != Highlight::Match)
    );
}

#[test]
fn arrow_keys_cycle_through_matches() {
    let mut m = model_from("x1\nx2\nx3\n");
    type_str(&mut m, "sx");
    assert_eq!(cursor(&m).0, 0);
    press_code(&mut m, KeyCode::Down);
    assert_eq!(cursor(&m).0, 1);
    press_code(&mut m, KeyCode::Right);
    assert_eq!(cursor(&m).0, 2);
    press_code(&mut m, KeyCode::Right);
    assert_eq!(cursor(&m).0, 0);
    press_code(&mut m, KeyCode::Up);
    assert_eq!(cursor(&m).0, 2);
}

#[test]
fn escape_restores_cursor_and_scroll() {
    let text: String = (0..60).map(|i| format!("row {i}\n")).collect();
    let mut m = model_sized(&text, 40, 12);
    type_str(&mut m, "jjj");
    let before = (cursor(&m), m.view().rowoff);
    type_str(&mut m, "/row 50");
    assert_eq!(cursor(&m), (50, 0));
    let rows = m.layout().text_rows();
    assert!(m.view().rowoff <= 50 && 50 < m.view().rowoff + rows);
    press_code(&mut m, KeyCode::Esc);
    assert_eq!((cursor(&m), m.view().rowoff), before);
}

#[test]
fn unmatched_query_keeps_cursor() {
    let mut m = model_from("abc\ndef\n");
    type_str(&mut m, "j/zzz");
    assert_eq!(cursor(&m), (1, 0));
}
