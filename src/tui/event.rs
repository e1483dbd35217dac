use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use log::warn;

use crate::core::key::{Key, KeyCombo, Modifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    /// Any key press, normalized. Routed through the session.
    Key(KeyCombo),
    Paste(String), // Bracketed paste
    Click(u16, u16),
    ScrollUp,
    ScrollDown,
    Resize,
    Quit, // Esc or Ctrl+C
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    match poll_event_timeout(Duration::ZERO) {
        Ok(event) => event,
        Err(e) => {
            warn!("Event poll failed: {}", e);
            None
        }
    }
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> std::io::Result<Option<TuiEvent>> {
    if event::poll(timeout)? {
        Ok(translate(event::read()?))
    } else {
        Ok(None)
    }
}

/// Map a raw crossterm event to a `TuiEvent`, dropping what we don't use.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            // With keyboard enhancement on, releases arrive too
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                _ => key_combo(&key_event).map(TuiEvent::Key),
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::Click(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Normalize a crossterm key event into a `KeyCombo`.
///
/// Shifted characters arrive already shifted ('A', '!'), so Shift is dropped
/// for plain typing. Alongside Ctrl/Alt/Meta it is kept and letters are
/// lowercased, giving `Ctrl+Shift+z` rather than `Ctrl+Shift+Z`.
pub fn key_combo(key_event: &KeyEvent) -> Option<KeyCombo> {
    let raw = key_event.modifiers;
    let mut modifiers = Modifiers {
        ctrl: raw.contains(KeyModifiers::CONTROL),
        alt: raw.contains(KeyModifiers::ALT),
        shift: raw.contains(KeyModifiers::SHIFT),
        meta: raw.intersects(KeyModifiers::SUPER | KeyModifiers::META),
    };

    let key = match key_event.code {
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Left => Key::ArrowLeft,
        KeyCode::Right => Key::ArrowRight,
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => {
            modifiers.shift = true;
            Key::Tab
        }
        KeyCode::F(n) => Key::F(n),
        KeyCode::Char(c) => {
            if modifiers.shift && modifiers.has_command() {
                Key::Char(c.to_ascii_lowercase())
            } else {
                modifiers.shift = false;
                Key::Char(c)
            }
        }
        _ => return None,
    };

    Some(KeyCombo { modifiers, key })
}
