//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the list, and
//! feeds normalized key combinations into the core `Session`.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event. All pending events are drained before the
//! next draw so fast typing and pastes do not render frame by frame.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
mod components;
mod event;
mod ui;

use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use log::{debug, info, warn};

use crate::core::config::{CompletedStyle, ResolvedConfig};
use crate::core::session::Session;
use crate::tui::component::EventHandler;
use crate::tui::components::{ChecklistState, RowHit};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of the editing state)
pub struct TuiState {
    pub checklist: ChecklistState,
    pub completed_style: CompletedStyle,
    pub bullet: String,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            checklist: ChecklistState::new(),
            completed_style: config.completed_style,
            bullet: config.bullet.clone(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol lets Shift+Enter and Ctrl+Enter through.
        // Terminals without it ignore the request.
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!(
            "Terminal modes enabled (mouse, bracketed paste, steady block cursor, keyboard enhancement)"
        );
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Apply one event. Returns true when the user asked to quit.
fn dispatch(session: &mut Session, tui: &mut TuiState, event: TuiEvent) -> bool {
    match event {
        TuiEvent::Quit => return true,
        TuiEvent::Key(combo) => {
            let handled = session.handle_key(&combo);
            debug!("{} handled as {:?}", combo, handled);
        }
        TuiEvent::Paste(text) => {
            session.paste(&text);
        }
        TuiEvent::Click(column, row) => match tui.checklist.hit_test(column, row) {
            Some(RowHit::Item(index)) => session.focus_item(index),
            Some(RowHit::AddItem) => {
                session.append();
            }
            None => {}
        },
        TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
            tui.checklist.handle_event(&event);
        }
        // Resize just needs a redraw
        TuiEvent::Resize => {}
    }
    false
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut session = Session::from_config(&config);
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Failed to enable terminal modes: {}", e))
        .ok();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &session, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500))?;
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if dispatch(&mut session, &mut tui, event) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!(
        "Exiting with {} items ({} completed)",
        session.list().items.len(),
        session.list().completed_count()
    );
    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::key::{Key, KeyCombo};
    use crate::test_support::session_with;
    use pretty_assertions::assert_eq;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn drawn(session: &Session) -> TuiState {
        let mut tui = TuiState::new(&ResolvedConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|f| ui::draw_ui(f, session, &mut tui))
            .unwrap();
        tui
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut session = session_with(&["a"]);
        let mut tui = TuiState::new(&ResolvedConfig::default());
        assert!(dispatch(&mut session, &mut tui, TuiEvent::Quit));
        assert!(!dispatch(&mut session, &mut tui, TuiEvent::Resize));
    }

    #[test]
    fn test_keys_reach_session() {
        let mut session = session_with(&["milk"]);
        let mut tui = TuiState::new(&ResolvedConfig::default());
        dispatch(&mut session, &mut tui, TuiEvent::Key(KeyCombo::new(Key::End)));
        dispatch(&mut session, &mut tui, TuiEvent::Key(KeyCombo::char('!')));
        dispatch(&mut session, &mut tui, TuiEvent::Paste("\tnow".into()));
        assert_eq!(session.list().texts(), vec!["milk! now"]);
    }

    #[test]
    fn test_click_focuses_item() {
        let mut session = session_with(&["one", "two"]);
        let mut tui = drawn(&session);

        dispatch(&mut session, &mut tui, TuiEvent::Click(3, 2));
        assert_eq!(session.list().focus, 1);
        assert_eq!(session.list().caret.head(), 3);
    }

    #[test]
    fn test_click_add_row_appends() {
        let mut session = session_with(&["one"]);
        let mut tui = drawn(&session);

        dispatch(&mut session, &mut tui, TuiEvent::Click(0, 2));
        assert_eq!(session.list().texts(), vec!["one", ""]);
        assert_eq!(session.list().focus, 1);
    }
}
