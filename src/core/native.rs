//! # Host-Default Editing
//!
//! What a plain text field does with a key when the engine passes it
//! through: typing, single-character deletes, caret motion and selection
//! inside the focused item. Nothing here crosses an item boundary; those
//! rules belong to [`crate::core::action`].
//!
//! Every edit leaves the focused text normalized and the caret clamped.

use crate::core::history::EditKind;
use crate::core::key::{Key, KeyCombo};
use crate::core::normalize;
use crate::core::state::{Caret, ListState, replace_chars};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeOutcome {
    /// Text of the focused item changed.
    Edited(EditKind),
    /// Only the caret or selection moved.
    CaretMoved,
    Ignored,
}

/// Apply the host default for `combo` to the focused item.
pub fn apply(state: &mut ListState, combo: &KeyCombo) -> NativeOutcome {
    let Some(item) = state.focused() else {
        return NativeOutcome::Ignored;
    };
    let len = item.len();
    let caret = state.caret.clamp(len);
    state.caret = caret;

    if let Some(c) = combo.typed_char() {
        return insert_text(state, &c.to_string());
    }

    let m = combo.modifiers;
    let span = caret.span();
    let next = match (&combo.key, m.shift, m.has_command()) {
        (Key::Char('a'), false, true) if m.ctrl || m.meta => Caret::Range {
            anchor: 0,
            head: len,
        },
        (Key::Backspace, _, _) => {
            if caret.has_selection() {
                return delete(state, span);
            }
            let pos = caret.head();
            if pos == 0 {
                return NativeOutcome::Ignored;
            }
            return delete(state, pos - 1..pos);
        }
        (Key::Delete, _, _) => {
            if caret.has_selection() {
                return delete(state, span);
            }
            let pos = caret.head();
            if pos >= len {
                return NativeOutcome::Ignored;
            }
            return delete(state, pos..pos + 1);
        }
        (Key::ArrowLeft, false, false) if caret.has_selection() => Caret::At(span.start),
        (Key::ArrowRight, false, false) if caret.has_selection() => Caret::At(span.end),
        (Key::ArrowLeft, false, false) => Caret::At(caret.head().saturating_sub(1)),
        (Key::ArrowRight, false, false) => Caret::At((caret.head() + 1).min(len)),
        (Key::ArrowUp | Key::ArrowDown, false, false) => Caret::At(caret.head()),
        (Key::Home, false, false) => Caret::At(0),
        (Key::End, false, false) => Caret::At(len),
        (Key::ArrowLeft, true, false) => extend(caret, caret.head().saturating_sub(1)),
        (Key::ArrowRight, true, false) => extend(caret, (caret.head() + 1).min(len)),
        (Key::Home, true, false) => extend(caret, 0),
        (Key::End, true, false) => extend(caret, len),
        _ => return NativeOutcome::Ignored,
    };

    let next = next.clamp(len);
    if next == caret {
        return NativeOutcome::Ignored;
    }
    state.caret = next;
    NativeOutcome::CaretMoved
}

/// Insert `text` at the caret, replacing any selection.
///
/// Pasted text goes through the same normalization as everything else, so
/// a multi-line paste lands as one line.
pub fn insert_text(state: &mut ListState, text: &str) -> NativeOutcome {
    let plain = normalize::plain_text(text);
    let focus = state.focus;
    let Some(len) = state.focused().map(|item| item.len()) else {
        return NativeOutcome::Ignored;
    };
    let span = state.caret.clamp(len).span();
    if plain.is_empty() && span.is_empty() {
        return NativeOutcome::Ignored;
    }

    let inserted = plain.chars().count();
    if let Some(item) = state.focused_mut() {
        replace_chars(&mut item.text, span.clone(), &plain);
    }
    state.caret = Caret::At(span.start + inserted);
    state.clamp_caret();
    NativeOutcome::Edited(EditKind::Typing { focus })
}

fn delete(state: &mut ListState, span: std::ops::Range<usize>) -> NativeOutcome {
    let focus = state.focus;
    if let Some(item) = state.focused_mut() {
        replace_chars(&mut item.text, span.clone(), "");
    }
    state.caret = Caret::At(span.start);
    state.clamp_caret();
    NativeOutcome::Edited(EditKind::Typing { focus })
}

fn extend(caret: Caret, head: usize) -> Caret {
    Caret::Range {
        anchor: caret.anchor(),
        head,
    }
}
