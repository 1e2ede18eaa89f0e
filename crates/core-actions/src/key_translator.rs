//! Stateless key -> `Action` translation.
//!
//! Resolution order:
//! * An open prompt captures every key.
//! * Keys shared by both modes (quit, save, arrows, paging, Home/End, delete
//!   line, Escape) come next.
//! * The remaining keys are interpreted by the current mode.
//!
//! `SHIFT` is ignored: the character code already carries the case. `ALT`
//! chords are not bound anywhere.

use crate::{Action, EditKind, ModeChange, MotionKind, PromptKey, PromptRequest};
use core_events::{KeyCode, KeyEvent, KeyModifiers, ctrl};
use core_state::Mode;

const CTRL_D: u8 = ctrl(b'd');
const CTRL_H: u8 = ctrl(b'h');
const CTRL_Q: u8 = ctrl(b'q');
const CTRL_S: u8 = ctrl(b's');

pub fn translate_key(mode: Mode, prompting: bool, key: &KeyEvent) -> Option<Action> {
    if key.mods.contains(KeyModifiers::ALT) {
        return None;
    }
    if prompting {
        return Some(Action::Prompt(translate_prompt(key)));
    }
    if let Some(action) = translate_common(key) {
        return Some(action);
    }
    match mode {
        Mode::Normal => translate_normal(key),
        Mode::Insert => translate_insert(key),
    }
}

fn translate_prompt(key: &KeyEvent) -> PromptKey {
    match key.code {
        KeyCode::Enter => PromptKey::Confirm,
        KeyCode::Esc => PromptKey::Cancel,
        KeyCode::Backspace | KeyCode::Delete => PromptKey::Backspace,
        KeyCode::Right | KeyCode::Down => PromptKey::Forward,
        KeyCode::Left | KeyCode::Up => PromptKey::Backward,
        _ => match key.control_byte() {
            Some(CTRL_H) => PromptKey::Backspace,
            Some(b) if is_printable(b) => PromptKey::Insert(b),
            _ => PromptKey::Other,
        },
    }
}

fn translate_common(key: &KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Up => Action::Motion(MotionKind::Up),
        KeyCode::Down => Action::Motion(MotionKind::Down),
        KeyCode::Left => Action::Motion(MotionKind::Left),
        KeyCode::Right => Action::Motion(MotionKind::Right),
        KeyCode::Home => Action::Motion(MotionKind::LineStart),
        KeyCode::End => Action::Motion(MotionKind::LineEnd),
        KeyCode::PageUp => Action::Motion(MotionKind::PageUp),
        KeyCode::PageDown => Action::Motion(MotionKind::PageDown),
        KeyCode::Esc => Action::ModeChange(ModeChange::LeaveInsert),
        KeyCode::Char(_) if key.mods.contains(KeyModifiers::CTRL) => {
            match key.control_byte()? {
                CTRL_Q => Action::Quit,
                CTRL_S => Action::Save,
                CTRL_D => Action::DeleteLine,
                _ => return None,
            }
        }
        _ => return None,
    };
    Some(action)
}

fn translate_normal(key: &KeyEvent) -> Option<Action> {
    let KeyCode::Char(b) = key.code else {
        return None;
    };
    if key.mods.contains(KeyModifiers::CTRL) {
        return None;
    }
    let action = match b {
        b'i' => Action::ModeChange(ModeChange::EnterInsert),
        b'a' => Action::ModeChange(ModeChange::InsertAfter),
        b'A' => Action::ModeChange(ModeChange::AppendLineEnd),
        b'o' => Action::ModeChange(ModeChange::OpenBelow),
        b'O' => Action::ModeChange(ModeChange::OpenAbove),
        b';' => Action::ModeChange(ModeChange::AppendSemicolon),
        b'h' => Action::Motion(MotionKind::Left),
        b'j' => Action::Motion(MotionKind::Down),
        b'k' => Action::Motion(MotionKind::Up),
        b'l' => Action::Motion(MotionKind::Right),
        b'0' => Action::Motion(MotionKind::LineStart),
        b'$' => Action::Motion(MotionKind::LineEnd),
        b'G' => Action::Motion(MotionKind::LastLine),
        b's' | b'/' => Action::StartPrompt(PromptRequest::Search),
        b'g' => Action::StartPrompt(PromptRequest::GotoLine),
        _ => return None,
    };
    Some(action)
}

fn translate_insert(key: &KeyEvent) -> Option<Action> {
    let edit = match key.code {
        KeyCode::Enter => EditKind::Newline,
        KeyCode::Backspace => EditKind::Backspace,
        KeyCode::Delete => EditKind::DeleteForward,
        _ => match key.control_byte()? {
            CTRL_H => EditKind::Backspace,
            b if is_printable(b) => EditKind::Insert(b),
            _ => return None,
        },
    };
    Some(Action::Edit(edit))
}

/// Printable ASCII: neither a control byte nor outside 7-bit.
fn is_printable(b: u8) -> bool {
    (0x20..0x7f).contains(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normal(key: KeyEvent) -> Option<Action> {
        translate_key(Mode::Normal, false, &key)
    }

    fn insert(key: KeyEvent) -> Option<Action> {
        translate_key(Mode::Insert, false, &key)
    }

    #[test]
    fn common_keys_resolve_in_both_modes() {
        for mode in [Mode::Normal, Mode::Insert] {
            assert_eq!(
                translate_key(mode, false, &KeyEvent::ctrl(b'q')),
                Some(Action::Quit)
            );
            assert_eq!(
                translate_key(mode, false, &KeyEvent::ctrl(b's')),
                Some(Action::Save)
            );
            assert_eq!(
                translate_key(mode, false, &KeyEvent::ctrl(b'd')),
                Some(Action::DeleteLine)
            );
            assert_eq!(
                translate_key(mode, false, &KeyEvent::plain(KeyCode::PageDown)),
                Some(Action::Motion(MotionKind::PageDown))
            );
            assert_eq!(
                translate_key(mode, false, &KeyEvent::plain(KeyCode::Esc)),
                Some(Action::ModeChange(ModeChange::LeaveInsert))
            );
        }
    }

    #[test]
    fn normal_mode_letters() {
        assert_eq!(
            normal(KeyEvent::byte(b'j')),
            Some(Action::Motion(MotionKind::Down))
        );
        assert_eq!(
            normal(KeyEvent::byte(b'/')),
            Some(Action::StartPrompt(PromptRequest::Search))
        );
        assert_eq!(
            normal(KeyEvent::byte(b's')),
            Some(Action::StartPrompt(PromptRequest::Search))
        );
        assert_eq!(
            normal(KeyEvent::byte(b'g')),
            Some(Action::StartPrompt(PromptRequest::GotoLine))
        );
        assert_eq!(normal(KeyEvent::byte(b'x')), None);
    }

    #[test]
    fn shift_is_ignored_for_uppercase_commands() {
        let shifted = KeyEvent::new(KeyCode::Char(b'G'), KeyModifiers::SHIFT);
        assert_eq!(normal(shifted), Some(Action::Motion(MotionKind::LastLine)));
        let shifted = KeyEvent::new(KeyCode::Char(b'O'), KeyModifiers::SHIFT);
        assert_eq!(
            normal(shifted),
            Some(Action::ModeChange(ModeChange::OpenAbove))
        );
    }

    #[test]
    fn insert_mode_bytes() {
        assert_eq!(
            insert(KeyEvent::byte(b'j')),
            Some(Action::Edit(EditKind::Insert(b'j')))
        );
        assert_eq!(
            insert(KeyEvent::ctrl(b'h')),
            Some(Action::Edit(EditKind::Backspace))
        );
        assert_eq!(
            insert(KeyEvent::plain(KeyCode::Delete)),
            Some(Action::Edit(EditKind::DeleteForward))
        );
        assert_eq!(
            insert(KeyEvent::plain(KeyCode::Enter)),
            Some(Action::Edit(EditKind::Newline))
        );
    }

    #[test]
    fn insert_mode_drops_control_bytes() {
        assert_eq!(insert(KeyEvent::plain(KeyCode::Tab)), None);
        assert_eq!(insert(KeyEvent::ctrl(b'c')), None);
        assert_eq!(insert(KeyEvent::ctrl(b'l')), None);
    }

    #[test]
    fn prompt_captures_everything() {
        let p = |k: KeyEvent| translate_key(Mode::Normal, true, &k);
        assert_eq!(
            p(KeyEvent::byte(b'j')),
            Some(Action::Prompt(PromptKey::Insert(b'j')))
        );
        assert_eq!(
            p(KeyEvent::ctrl(b'q')),
            Some(Action::Prompt(PromptKey::Other))
        );
        assert_eq!(
            p(KeyEvent::plain(KeyCode::Down)),
            Some(Action::Prompt(PromptKey::Forward))
        );
        assert_eq!(
            p(KeyEvent::plain(KeyCode::Left)),
            Some(Action::Prompt(PromptKey::Backward))
        );
        assert_eq!(
            p(KeyEvent::ctrl(b'h')),
            Some(Action::Prompt(PromptKey::Backspace))
        );
        assert_eq!(
            p(KeyEvent::plain(KeyCode::Esc)),
            Some(Action::Prompt(PromptKey::Cancel))
        );
    }

    #[test]
    fn alt_chords_are_unbound() {
        let k = KeyEvent::new(KeyCode::Char(b'i'), KeyModifiers::ALT);
        assert_eq!(normal(k), None);
    }
}
