//! Key combination → command bindings.

use std::collections::HashMap;

use crate::core::action::Command;
use crate::core::key::{Key, KeyCombo};

/// What a bound key combination asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Edit(Command),
    Undo,
    Redo,
}

#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<KeyCombo, Binding>,
}

impl Default for Keymap {
    fn default() -> Self {
        use Command::*;

        let enter = || KeyCombo::new(Key::Enter);
        let z = || KeyCombo::char('z');

        let mut keymap = Self::empty();
        for (combo, binding) in [
            (KeyCombo::new(Key::ArrowUp), Binding::Edit(MoveUp)),
            (KeyCombo::new(Key::ArrowDown), Binding::Edit(MoveDown)),
            (KeyCombo::new(Key::ArrowLeft), Binding::Edit(MoveLeft)),
            (KeyCombo::new(Key::ArrowRight), Binding::Edit(MoveRight)),
            (enter(), Binding::Edit(Split)),
            (KeyCombo::new(Key::Backspace), Binding::Edit(MergeBackward)),
            (KeyCombo::new(Key::Delete), Binding::Edit(MergeForward)),
            (enter().ctrl(), Binding::Edit(ToggleCompleted)),
            (enter().meta(), Binding::Edit(ToggleCompleted)),
            (enter().shift(), Binding::Edit(ToggleCompleted)),
            (KeyCombo::char('n').ctrl(), Binding::Edit(Append)),
            (z().ctrl(), Binding::Undo),
            (z().meta(), Binding::Undo),
            (z().ctrl().shift(), Binding::Redo),
            (z().meta().shift(), Binding::Redo),
            (KeyCombo::char('y').ctrl(), Binding::Redo),
        ] {
            keymap.bind(combo, binding);
        }
        keymap
    }
}

impl Keymap {
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind `combo`, replacing any earlier binding for it.
    pub fn bind(&mut self, combo: KeyCombo, binding: Binding) {
        self.bindings.insert(combo, binding);
    }

    pub fn resolve(&self, combo: &KeyCombo) -> Option<Binding> {
        self.bindings.get(combo).copied()
    }

    /// All combos bound to `binding`, in display order.
    pub fn combos_for(&self, binding: Binding) -> Vec<String> {
        let mut combos: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, b)| **b == binding)
            .map(|(combo, _)| combo.to_string())
            .collect();
        combos.sort();
        combos
    }
}
