//! # Editing Session
//!
//! Glue between a stream of key combinations and the engine. One `Session`
//! owns the live `ListState`, the keymap and the undo history, and runs each
//! key through the same pipeline:
//!
//! ```text
//! KeyCombo ─► Keymap ─► Undo / Redo ─────────────► History
//!                   └─► Command ─► action::update ─► Handled ─► swap state
//!                                                └─► PassThrough
//!                                                        │
//!                                  native::apply ◄───────┘
//! ```
//!
//! Keys are processed strictly one at a time, in the order given.

use log::{debug, info};

use crate::core::action::{self, Command, Outcome};
use crate::core::config::ResolvedConfig;
use crate::core::history::{EditKind, History};
use crate::core::key::KeyCombo;
use crate::core::keymap::{Binding, Keymap};
use crate::core::native::{self, NativeOutcome};
use crate::core::state::{Item, ListState};

/// Who ended up handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// A list-editing command.
    Engine(Command),
    /// Undo or redo swapped the state.
    History,
    /// Host-default editing inside the focused item.
    Native,
    /// Nothing happened.
    Ignored,
}

pub struct Session {
    list: ListState,
    keymap: Keymap,
    history: History,
    pub status_message: String,
}

impl Session {
    pub fn new(list: ListState, keymap: Keymap, history_limit: usize) -> Self {
        Self {
            list,
            keymap,
            history: History::new(history_limit),
            status_message: String::new(),
        }
    }

    /// Seed from config. An empty seed still gets one item to type into.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut items: Vec<Item> = config.initial_items.iter().map(Item::new).collect();
        if items.is_empty() {
            items.push(Item::default());
        }
        let mut list = ListState::new(items);
        list.normalize();

        let mut session = Self::new(list, config.keymap.clone(), config.history_limit);
        session.status_message = config.status_message.clone();
        session
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Run one key press through keymap, engine and host defaults.
    pub fn handle_key(&mut self, combo: &KeyCombo) -> Handled {
        debug!("KEY: {}", combo);

        match self.keymap.resolve(combo) {
            Some(Binding::Undo) => return self.undo(),
            Some(Binding::Redo) => return self.redo(),
            Some(Binding::Edit(command)) => {
                if self.run(command) {
                    return Handled::Engine(command);
                }
            }
            None => {}
        }

        let before = self.list.clone();
        match native::apply(&mut self.list, combo) {
            NativeOutcome::Edited(kind) => {
                self.history.record(&before, kind);
                Handled::Native
            }
            NativeOutcome::CaretMoved => {
                self.history.break_run();
                Handled::Native
            }
            NativeOutcome::Ignored => Handled::Ignored,
        }
    }

    /// Bracketed paste: insert at the caret as plain text.
    pub fn paste(&mut self, text: &str) -> Handled {
        let before = self.list.clone();
        match native::insert_text(&mut self.list, text) {
            NativeOutcome::Edited(_) => {
                // A paste is its own undo step, never merged into typing.
                self.history.record(&before, EditKind::Structural);
                Handled::Native
            }
            _ => Handled::Ignored,
        }
    }

    /// The "add item" affordance.
    pub fn append(&mut self) -> Handled {
        self.run(Command::Append);
        Handled::Engine(Command::Append)
    }

    /// Focus an item from outside the keyboard (mouse click), caret at end.
    pub fn focus_item(&mut self, index: usize) {
        let Some(len) = self.list.items.get(index).map(Item::len) else {
            return;
        };
        self.list.focus_at(index, len);
        self.history.break_run();
    }

    pub fn undo(&mut self) -> Handled {
        match self.history.undo(&self.list) {
            Some(previous) => {
                self.list = previous;
                self.status_message = "Undo".to_string();
                Handled::History
            }
            None => Handled::Ignored,
        }
    }

    pub fn redo(&mut self) -> Handled {
        match self.history.redo(&self.list) {
            Some(next) => {
                self.list = next;
                self.status_message = "Redo".to_string();
                Handled::History
            }
            None => Handled::Ignored,
        }
    }

    /// Apply an engine command; false when it passed through.
    fn run(&mut self, command: Command) -> bool {
        match action::update(&self.list, command) {
            Outcome::Handled(transition) => {
                if transition.mutates_items() {
                    self.history.record(&self.list, EditKind::Structural);
                    info!("{:?} applied: {:?}", command, transition.changes);
                } else {
                    self.history.break_run();
                }
                self.list = transition.state;
                true
            }
            Outcome::PassThrough => false,
        }
    }
}
