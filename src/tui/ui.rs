use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::session::Session;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Checklist, TitleBar};

/// Split the frame into title bar and list area.
fn main_layout(area: Rect) -> [Rect; 2] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, session: &Session, tui: &mut TuiState) {
    let [title_area, list_area] = main_layout(frame.area());
    let list = session.list();

    let mut title_bar = TitleBar::new(
        list.items.len(),
        list.completed_count(),
        &session.status_message,
    );
    title_bar.render(frame, title_area);

    let mut checklist = Checklist::new(&mut tui.checklist, list, tui.completed_style, &tui.bullet);
    checklist.render(frame, list_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ResolvedConfig;
    use crate::test_support::{buffer_text, session_with};
    use crate::tui::components::RowHit;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_draw_ui() {
        let session = session_with(&["Buy milk", "Walk dog"]);
        let mut tui = TuiState::new(&ResolvedConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal.draw(|f| draw_ui(f, &session, &mut tui)).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("0/2 done"));
        assert!(text.contains("• Buy milk"));
        assert!(text.contains("+ Add item"));
    }

    #[test]
    fn test_list_sits_below_title() {
        let session = session_with(&["one"]);
        let mut tui = TuiState::new(&ResolvedConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal.draw(|f| draw_ui(f, &session, &mut tui)).unwrap();

        assert_eq!(tui.checklist.hit_test(0, 0), None);
        assert_eq!(tui.checklist.hit_test(0, 1), Some(RowHit::Item(0)));
        assert_eq!(tui.checklist.hit_test(0, 2), Some(RowHit::AddItem));
    }
}
