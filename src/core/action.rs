//! # Actions
//!
//! The list edit engine. Every keystroke the keymap recognizes becomes a
//! `Command`; `update()` maps the current snapshot plus that command to the
//! next snapshot, or reports that the host should handle the key itself.
//!
//! ```text
//! ListState + Command  →  update()  →  Handled(Transition) | PassThrough
//! ```
//!
//! No side effects, no stored state. The caller owns the `ListState` and
//! swaps in `transition.state` when a command is handled.
//!
//! Two rules are fixed where older variants disagreed:
//! - Enter at offset 0 inserts the empty item *before* the current one and
//!   keeps the caret where it was.
//! - Backspace at the start of an item whose predecessor is empty removes the
//!   predecessor instead of merging into it.

use log::debug;

use crate::core::state::{Item, ListState, split_at_char};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// ArrowUp: previous item, same offset.
    MoveUp,
    /// ArrowDown: next item, same offset.
    MoveDown,
    /// ArrowLeft at offset 0: end of the previous item.
    MoveLeft,
    /// ArrowRight at end of text: start of the next item.
    MoveRight,
    /// Enter: split the focused item at the caret.
    Split,
    /// Backspace at offset 0: fold into the previous item.
    MergeBackward,
    /// Delete at end of text: pull the next item in.
    MergeForward,
    /// Flip the completed flag of the focused item.
    ToggleCompleted,
    /// Append an empty item at the end and focus it.
    Append,
}

/// What a transition did to the items, in application order.
///
/// Indices refer to the list as it stood right after that change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Inserted(usize),
    Removed(usize),
    TextChanged(usize),
    Toggled(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ListState,
    pub changes: Vec<Change>,
}

impl Transition {
    fn new(state: ListState, changes: Vec<Change>) -> Self {
        Self { state, changes }
    }

    /// False for pure caret moves.
    pub fn mutates_items(&self) -> bool {
        !self.changes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Handled(Transition),
    /// Precondition not met: leave the key to host-default handling.
    PassThrough,
}

impl Outcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, Outcome::Handled(_))
    }
}

/// Apply one command to a snapshot.
///
/// A focus index that no longer names an item is a no-op, and a caret past
/// the end of the focused text is clamped before any rule looks at it.
pub fn update(state: &ListState, command: Command) -> Outcome {
    let transition = if command == Command::Append {
        Some(append(state))
    } else {
        let Some(item) = state.focused() else {
            debug!(
                "{:?} ignored: focus {} outside {} items",
                command,
                state.focus,
                state.items.len()
            );
            return Outcome::PassThrough;
        };
        let mut state = state.clone();
        state.caret = state.caret.clamp(item.len());

        match command {
            Command::MoveUp => move_up(state),
            Command::MoveDown => move_down(state),
            Command::MoveLeft => move_left(state),
            Command::MoveRight => move_right(state),
            Command::Split => split(state),
            Command::MergeBackward => merge_backward(state),
            Command::MergeForward => merge_forward(state),
            Command::ToggleCompleted => toggle_completed(state),
            Command::Append => unreachable!("handled above"),
        }
    };

    match transition {
        Some(mut transition) => {
            for index in transition.state.normalize() {
                if !transition.changes.contains(&Change::TextChanged(index)) {
                    transition.changes.push(Change::TextChanged(index));
                }
            }
            debug!(
                "{:?}: focus {} caret {:?}, changes {:?}",
                command, transition.state.focus, transition.state.caret, transition.changes
            );
            Outcome::Handled(transition)
        }
        None => Outcome::PassThrough,
    }
}

fn move_up(mut state: ListState) -> Option<Transition> {
    let pos = state.caret.position()?;
    if state.focus == 0 {
        return None;
    }
    state.focus_at(state.focus - 1, pos);
    Some(Transition::new(state, Vec::new()))
}

fn move_down(mut state: ListState) -> Option<Transition> {
    let pos = state.caret.position()?;
    if state.focus + 1 >= state.items.len() {
        return None;
    }
    state.focus_at(state.focus + 1, pos);
    Some(Transition::new(state, Vec::new()))
}

fn move_left(mut state: ListState) -> Option<Transition> {
    let pos = state.caret.position()?;
    if pos != 0 || state.focus == 0 {
        return None;
    }
    let prev = state.focus - 1;
    let end = state.items[prev].len();
    state.focus_at(prev, end);
    Some(Transition::new(state, Vec::new()))
}

fn move_right(mut state: ListState) -> Option<Transition> {
    let pos = state.caret.position()?;
    let len = state.items[state.focus].len();
    if pos != len || state.focus + 1 >= state.items.len() {
        return None;
    }
    state.focus_at(state.focus + 1, 0);
    Some(Transition::new(state, Vec::new()))
}

fn split(mut state: ListState) -> Option<Transition> {
    let pos = state.caret.position()?;
    let focus = state.focus;

    if pos == 0 {
        state.items.insert(focus, Item::default());
        state.focus_at(focus + 1, 0);
        return Some(Transition::new(state, vec![Change::Inserted(focus)]));
    }

    let (head, tail) = split_at_char(&state.items[focus].text, pos);
    let (head, tail) = (head.to_string(), tail.to_string());
    state.items[focus].text = head;
    state.items.insert(focus + 1, Item::new(tail));
    state.focus_at(focus + 1, 0);
    Some(Transition::new(
        state,
        vec![Change::TextChanged(focus), Change::Inserted(focus + 1)],
    ))
}

fn merge_backward(mut state: ListState) -> Option<Transition> {
    let pos = state.caret.position()?;
    let focus = state.focus;
    if pos != 0 || focus == 0 {
        return None;
    }
    let prev = focus - 1;

    if state.items[prev].is_empty() {
        state.items.remove(prev);
        state.focus_at(prev, 0);
        return Some(Transition::new(state, vec![Change::Removed(prev)]));
    }

    let boundary = state.items[prev].len();
    let current = state.items.remove(focus);
    state.items[prev].text.push_str(&current.text);
    state.focus_at(prev, boundary);
    Some(Transition::new(
        state,
        vec![Change::Removed(focus), Change::TextChanged(prev)],
    ))
}

fn merge_forward(mut state: ListState) -> Option<Transition> {
    let pos = state.caret.position()?;
    let focus = state.focus;
    if pos != state.items[focus].len() || focus + 1 >= state.items.len() {
        return None;
    }

    let next = state.items.remove(focus + 1);
    state.items[focus].text.push_str(&next.text);
    state.focus_at(focus, pos);
    Some(Transition::new(
        state,
        vec![Change::Removed(focus + 1), Change::TextChanged(focus)],
    ))
}

fn toggle_completed(mut state: ListState) -> Option<Transition> {
    state.caret.position()?;
    let focus = state.focus;
    let completed = !state.items[focus].completed;
    state.items[focus].completed = completed;

    if completed && focus + 1 < state.items.len() {
        state.focus_at(focus + 1, 0);
    }
    Some(Transition::new(state, vec![Change::Toggled(focus)]))
}

fn append(state: &ListState) -> Transition {
    let mut state = state.clone();
    state.items.push(Item::default());
    let last = state.items.len() - 1;
    state.focus_at(last, 0);
    Transition::new(state, vec![Change::Inserted(last)])
}
