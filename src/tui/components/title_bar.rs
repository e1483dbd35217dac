//! # TitleBar Component
//!
//! One-line header: app name, progress, and the transient status message.
//!
//! Stateless. Every field is a prop filled from the session each frame:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(list.items.len(), list.completed_count(), &session.status_message);
//! title_bar.render(frame, title_area);
//! ```
//!
//! The text collapses on empty status:
//!
//! 1. `"tick  2/5 done | Undo"`
//! 2. `"tick  2/5 done"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct TitleBar {
    pub item_count: usize,
    pub completed_count: usize,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(item_count: usize, completed_count: usize, status_message: &str) -> Self {
        Self {
            item_count,
            completed_count,
            status_message: status_message.to_string(),
        }
    }

    fn progress(&self) -> String {
        format!("{}/{} done", self.completed_count, self.item_count)
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("tick", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::raw(self.progress()),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message.as_str(),
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let text = rendered(&mut TitleBar::new(5, 2, "Undo"));
        assert!(text.contains("tick"));
        assert!(text.contains("2/5 done"));
        assert!(text.contains("| Undo"));
    }

    #[test]
    fn test_title_bar_without_status() {
        let text = rendered(&mut TitleBar::new(1, 0, ""));
        assert!(text.contains("0/1 done"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_title_bar_props_are_mutable() {
        let mut title_bar = TitleBar::new(1, 0, "");
        title_bar.completed_count = 1;
        title_bar.status_message = "Redo".to_string();
        let text = rendered(&mut title_bar);
        assert!(text.contains("1/1 done | Redo"));
    }
}
