//! # List State
//!
//! The snapshot the engine reads and returns: the items, which item has
//! focus, and where the caret sits inside it.
//!
//! ```text
//! ListState
//! ├── items: Vec<Item>    // document order
//! │   ├── text: String    // plain text only
//! │   └── completed: bool
//! ├── focus: usize        // index into items
//! └── caret: Caret        // At(offset) or Range { anchor, head }
//! ```
//!
//! Offsets count characters, not bytes. Every public mutator clamps them to
//! `[0, len]` of the focused item, so a stale snapshot can never index past
//! the end of a string.

use std::ops::Range;

use crate::core::normalize;

/// One line of the checklist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    pub text: String,
    pub completed: bool,
}

impl Item {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }

    pub fn done(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: true,
        }
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        char_len(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Caret inside the focused item.
///
/// A `Range` whose anchor equals its head is treated as a plain caret; use
/// [`Caret::clamp`] to collapse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caret {
    At(usize),
    Range { anchor: usize, head: usize },
}

impl Default for Caret {
    fn default() -> Self {
        Caret::At(0)
    }
}

impl Caret {
    /// The single caret position, or `None` while a selection is active.
    pub fn position(self) -> Option<usize> {
        match self {
            Caret::At(pos) => Some(pos),
            Caret::Range { anchor, head } if anchor == head => Some(head),
            Caret::Range { .. } => None,
        }
    }

    pub fn has_selection(self) -> bool {
        self.position().is_none()
    }

    /// The end of the caret that moves with the user.
    pub fn head(self) -> usize {
        match self {
            Caret::At(pos) => pos,
            Caret::Range { head, .. } => head,
        }
    }

    pub fn anchor(self) -> usize {
        match self {
            Caret::At(pos) => pos,
            Caret::Range { anchor, .. } => anchor,
        }
    }

    /// Selected character span, ordered start to end. Empty for a plain caret.
    pub fn span(self) -> Range<usize> {
        let (a, h) = (self.anchor(), self.head());
        a.min(h)..a.max(h)
    }

    /// Clamp both ends to `[0, len]` and collapse an empty range.
    pub fn clamp(self, len: usize) -> Caret {
        match self {
            Caret::At(pos) => Caret::At(pos.min(len)),
            Caret::Range { anchor, head } => {
                let (anchor, head) = (anchor.min(len), head.min(len));
                if anchor == head {
                    Caret::At(head)
                } else {
                    Caret::Range { anchor, head }
                }
            }
        }
    }
}

/// The full editing snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub items: Vec<Item>,
    pub focus: usize,
    pub caret: Caret,
}

impl ListState {
    /// Focus the first item with the caret at its start.
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            focus: 0,
            caret: Caret::At(0),
        }
    }

    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(texts.into_iter().map(Item::new).collect())
    }

    /// Builder-style focus placement, clamped like [`ListState::focus_at`].
    pub fn focused_at(mut self, index: usize, offset: usize) -> Self {
        self.focus_at(index, offset);
        self
    }

    /// Builder-style selection inside the focused item.
    pub fn selecting(mut self, anchor: usize, head: usize) -> Self {
        let len = self.focused().map(Item::len).unwrap_or(0);
        self.caret = Caret::Range { anchor, head }.clamp(len);
        self
    }

    pub fn focused(&self) -> Option<&Item> {
        self.items.get(self.focus)
    }

    pub fn focused_mut(&mut self) -> Option<&mut Item> {
        self.items.get_mut(self.focus)
    }

    /// Move focus to `index` and place a caret at `offset`, clamped to that
    /// item's length. An out-of-range index is clamped to the last item.
    pub fn focus_at(&mut self, index: usize, offset: usize) {
        self.focus = index.min(self.items.len().saturating_sub(1));
        let len = self.focused().map(Item::len).unwrap_or(0);
        self.caret = Caret::At(offset.min(len));
    }

    /// Re-clamp the caret against the focused item.
    pub fn clamp_caret(&mut self) {
        let len = self.focused().map(Item::len).unwrap_or(0);
        self.caret = self.caret.clamp(len);
    }

    /// Strip formatting from every item and re-clamp the caret.
    ///
    /// Returns the indices whose text actually changed.
    pub fn normalize(&mut self) -> Vec<usize> {
        let mut changed = Vec::new();
        for (index, item) in self.items.iter_mut().enumerate() {
            if !normalize::is_plain(&item.text) {
                item.text = normalize::plain_text(&item.text);
                changed.push(index);
            }
        }
        self.clamp_caret();
        changed
    }

    pub fn texts(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.text.as_str()).collect()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }
}

// ============================================================================
// Character-offset helpers
// ============================================================================

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte index of the character at `offset`, clamped to `text.len()`.
pub fn byte_index(text: &str, offset: usize) -> usize {
    text.char_indices()
        .nth(offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Split at a character offset.
pub fn split_at_char(text: &str, offset: usize) -> (&str, &str) {
    text.split_at(byte_index(text, offset))
}

/// Replace the characters in `range` with `with`.
pub fn replace_chars(text: &mut String, range: Range<usize>, with: &str) {
    let start = byte_index(text, range.start);
    let end = byte_index(text, range.end).max(start);
    text.replace_range(start..end, with);
}
