//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::key::KeyCombo;
use crate::core::keymap::Keymap;
use crate::core::session::Session;
use crate::core::state::ListState;

/// A session over `texts` with default bindings, focus on the first item.
pub fn session_with(texts: &[&str]) -> Session {
    Session::new(
        ListState::from_texts(texts.iter().copied()),
        Keymap::default(),
        crate::core::history::DEFAULT_HISTORY_LIMIT,
    )
}

/// Feed each character of `text` as a key press.
pub fn type_text(session: &mut Session, text: &str) {
    for c in text.chars() {
        session.handle_key(&KeyCombo::char(c));
    }
}

/// Flatten a test terminal buffer into one string for `contains` checks.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
