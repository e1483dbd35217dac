//! # Undo History
//!
//! Bounded undo/redo stacks of whole `ListState` snapshots. The caller
//! records the snapshot from *before* each edit; undo swaps it back in.
//!
//! Runs of typing inside one item collapse into a single undo step, so
//! Ctrl+Z removes a word rather than a letter. Any structural edit, caret
//! jump or undo ends the run.

use std::collections::VecDeque;

use crate::core::state::ListState;

pub const DEFAULT_HISTORY_LIMIT: usize = 200;

/// How an edit relates to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// In-item text edit; coalesces with the previous one on the same item.
    Typing { focus: usize },
    /// Split, merge, toggle, append.
    Structural,
}

#[derive(Debug)]
pub struct History {
    undo: VecDeque<ListState>,
    redo: Vec<ListState>,
    limit: usize,
    last_kind: Option<EditKind>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit,
            last_kind: None,
        }
    }

    /// Record `before`, the snapshot an edit of `kind` is about to replace.
    pub fn record(&mut self, before: &ListState, kind: EditKind) {
        self.redo.clear();

        let coalesce = matches!(kind, EditKind::Typing { .. }) && self.last_kind == Some(kind);
        self.last_kind = Some(kind);
        if coalesce || self.limit == 0 {
            return;
        }

        self.undo.push_back(before.clone());
        while self.undo.len() > self.limit {
            self.undo.pop_front();
        }
    }

    /// End the current typing run without recording anything.
    pub fn break_run(&mut self) {
        self.last_kind = None;
    }

    pub fn undo(&mut self, current: &ListState) -> Option<ListState> {
        let previous = self.undo.pop_back()?;
        self.redo.push(current.clone());
        self.last_kind = None;
        Some(previous)
    }

    pub fn redo(&mut self, current: &ListState) -> Option<ListState> {
        let next = self.redo.pop()?;
        self.undo.push_back(current.clone());
        self.last_kind = None;
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn list(texts: &[&str]) -> ListState {
        ListState::from_texts(texts.iter().copied())
    }

    #[test]
    fn test_undo_then_redo() {
        let mut history = History::default();
        let before = list(&["a"]);
        let after = list(&["a", ""]);
        history.record(&before, EditKind::Structural);

        let undone = history.undo(&after).unwrap();
        assert_eq!(undone, before);
        assert!(history.can_redo());

        let redone = history.redo(&undone).unwrap();
        assert_eq!(redone, after);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_typing_coalesces_per_item() {
        let mut history = History::default();
        history.record(&list(&[""]), EditKind::Typing { focus: 0 });
        history.record(&list(&["a"]), EditKind::Typing { focus: 0 });
        history.record(&list(&["ab"]), EditKind::Typing { focus: 0 });

        assert_eq!(history.undo(&list(&["abc"])), Some(list(&[""])));
        assert!(!history.can_undo());
    }

    #[test]
    fn test_typing_in_another_item_starts_new_step() {
        let mut history = History::default();
        history.record(&list(&["", ""]), EditKind::Typing { focus: 0 });
        history.record(&list(&["a", ""]), EditKind::Typing { focus: 1 });

        assert_eq!(history.undo(&list(&["a", "b"])), Some(list(&["a", ""])));
        assert_eq!(history.undo(&list(&["a", ""])), Some(list(&["", ""])));
    }

    #[test]
    fn test_break_run_splits_typing() {
        let mut history = History::default();
        history.record(&list(&[""]), EditKind::Typing { focus: 0 });
        history.break_run();
        history.record(&list(&["a"]), EditKind::Typing { focus: 0 });

        assert_eq!(history.undo(&list(&["ab"])), Some(list(&["a"])));
        assert!(history.can_undo());
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut history = History::default();
        history.record(&list(&["a"]), EditKind::Structural);
        history.undo(&list(&["a", ""]));
        history.record(&list(&["a"]), EditKind::Structural);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = History::new(2);
        for text in ["1", "2", "3"] {
            history.record(&list(&[text]), EditKind::Structural);
        }
        assert_eq!(history.undo(&list(&["4"])), Some(list(&["3"])));
        assert_eq!(history.undo(&list(&["3"])), Some(list(&["2"])));
        assert_eq!(history.undo(&list(&["2"])), None);
    }

    #[test]
    fn test_zero_limit_disables_undo() {
        let mut history = History::new(0);
        history.record(&list(&["a"]), EditKind::Structural);
        assert!(!history.can_undo());
    }
}
