//! # Checklist Component
//!
//! Scrollable view of the list items with the caret placed on the focused
//! one.
//!
//! ## Architecture
//!
//! `Checklist` is transient (built each frame) and wraps
//! `&'a mut ChecklistState` (persistent scroll and layout state) and the
//! current `ListState` (props). Rendering measures every row, refreshes the
//! layout cache, scrolls the caret into view when it moved, then draws all
//! rows into a `ScrollView` followed by the "+ Add item" row.
//!
//! Each row is a prefix (bullet or checkbox) and the item text wrapped by
//! [`layout::wrap_ranges`]; continuation lines are indented to the prefix
//! width so the text column stays aligned.

pub mod layout;

use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};
use unicode_width::UnicodeWidthStr;

use crate::core::config::CompletedStyle;
use crate::core::state::{Item, ListState};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use self::layout::{caret_cell, slice_chars, wrap_ranges};

pub const ADD_ITEM_LABEL: &str = "+ Add item";

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHit {
    Item(usize),
    AddItem,
}

/// Layout and scroll state for the checklist.
/// Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct ChecklistState {
    pub scroll_state: ScrollViewState,
    pub layout: LayoutCache,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Screen area of the last render, for hit testing
    pub area: Rect,
    /// (focus, caret head) the viewport last followed
    followed_caret: Option<(usize, usize)>,
}

impl ChecklistState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self
            .layout
            .total_height()
            .saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Scroll the least amount that makes content row `row` visible.
    pub fn scroll_to_row(&mut self, row: u16) {
        let offset_y = self.scroll_state.offset().y;
        if row < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: row });
        } else if self.viewport_height > 0 && row >= offset_y + self.viewport_height {
            let new_y = row + 1 - self.viewport_height;
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    /// Follow the caret only when it moved, so wheel scrolling sticks.
    fn follow_caret(&mut self, caret: (usize, usize), row: u16) {
        if self.followed_caret == Some(caret) {
            return;
        }
        self.followed_caret = Some(caret);
        self.scroll_to_row(row);
    }

    /// Map a screen cell to the row under it, using the last render's layout.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<RowHit> {
        if !self.area.contains(Position { x: column, y: row }) {
            return None;
        }
        let content_y = (row - self.area.y) + self.scroll_state.offset().y;
        let index = self
            .layout
            .prefix_heights
            .partition_point(|&bottom| bottom <= content_y);
        let item_count = self.layout.heights.len().saturating_sub(1);

        if index < item_count {
            Some(RowHit::Item(index))
        } else if index == item_count {
            Some(RowHit::AddItem)
        } else {
            None
        }
    }
}

impl EventHandler for ChecklistState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
            }
            _ => {}
        }
        None
    }
}

/// Row heights from the last render. The last entry is the add row.
#[derive(Debug, Default)]
pub struct LayoutCache {
    pub heights: Vec<u16>,
    pub prefix_heights: Vec<u16>,
}

impl LayoutCache {
    fn rebuild(&mut self, heights: Vec<u16>) {
        self.heights = heights;
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc = acc.saturating_add(h);
                Some(*acc)
            })
            .collect();
    }

    /// Content row where row `index` starts.
    pub fn top_of(&self, index: usize) -> u16 {
        match index {
            0 => 0,
            _ => self.prefix_heights.get(index - 1).copied().unwrap_or(0),
        }
    }

    pub fn total_height(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }
}

/// One measured item row.
struct Row {
    prefix: String,
    prefix_width: u16,
    ranges: Vec<Range<usize>>,
}

impl Row {
    fn measure(prefix: String, text: &str, content_width: u16) -> Self {
        let prefix_width = prefix.width() as u16;
        let text_width = content_width.saturating_sub(prefix_width).max(1);
        Self {
            prefix,
            prefix_width,
            ranges: wrap_ranges(text, text_width),
        }
    }

    fn height(&self) -> u16 {
        self.ranges.len() as u16
    }
}

pub struct Checklist<'a> {
    pub state: &'a mut ChecklistState,
    pub list: &'a ListState,
    pub completed_style: CompletedStyle,
    pub bullet: &'a str,
}

impl<'a> Checklist<'a> {
    pub fn new(
        state: &'a mut ChecklistState,
        list: &'a ListState,
        completed_style: CompletedStyle,
        bullet: &'a str,
    ) -> Self {
        Self {
            state,
            list,
            completed_style,
            bullet,
        }
    }

    fn prefix(&self, item: &Item) -> String {
        match self.completed_style {
            CompletedStyle::Checkbox if item.completed => "[x] ".to_string(),
            CompletedStyle::Checkbox => "[ ] ".to_string(),
            _ => format!("{} ", self.bullet),
        }
    }

    fn text_style(&self, item: &Item, is_focused: bool) -> Style {
        let style = if is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        if !item.completed {
            return style;
        }
        match self.completed_style {
            CompletedStyle::Strikethrough => style.add_modifier(Modifier::CROSSED_OUT),
            CompletedStyle::Dim => style.add_modifier(Modifier::DIM),
            CompletedStyle::Checkbox => style,
        }
    }

    fn item_lines(
        &self,
        item: &Item,
        row: &Row,
        selection: Option<Range<usize>>,
        style: Style,
    ) -> Vec<Line<'static>> {
        let indent = " ".repeat(row.prefix_width as usize);

        row.ranges
            .iter()
            .enumerate()
            .map(|(i, range)| {
                let lead = if i == 0 { row.prefix.clone() } else { indent.clone() };
                let mut spans = vec![Span::styled(lead, style)];

                // Cut the line at selection edges that fall inside it
                let mut cuts = vec![range.start, range.end];
                if let Some(sel) = &selection {
                    cuts.extend(
                        [sel.start, sel.end]
                            .into_iter()
                            .filter(|&p| p > range.start && p < range.end),
                    );
                }
                cuts.sort_unstable();
                cuts.dedup();

                for pair in cuts.windows(2) {
                    let segment = pair[0]..pair[1];
                    let selected = selection
                        .as_ref()
                        .is_some_and(|s| s.start <= segment.start && segment.end <= s.end);
                    let segment_style = if selected {
                        style.add_modifier(Modifier::REVERSED)
                    } else {
                        style
                    };
                    spans.push(Span::styled(
                        slice_chars(&item.text, segment).to_string(),
                        segment_style,
                    ));
                }
                Line::from(spans)
            })
            .collect()
    }
}

impl<'a> Component for Checklist<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area

        // 1. Measure rows and refresh the layout cache
        let rows: Vec<Row> = self
            .list
            .items
            .iter()
            .map(|item| Row::measure(self.prefix(item), &item.text, content_width))
            .collect();
        let mut heights: Vec<u16> = rows.iter().map(Row::height).collect();
        heights.push(1);
        self.state.layout.rebuild(heights);
        self.state.viewport_height = area.height;
        self.state.area = area;

        // 2. Place the caret and keep it on screen
        let focus = self.list.focus;
        let head = self.list.caret.head();
        let caret = self
            .list
            .focused()
            .zip(rows.get(focus))
            .map(|(item, row)| {
                let (line, column) = caret_cell(&item.text, &row.ranges, head);
                (
                    self.state.layout.top_of(focus) + line,
                    row.prefix_width + column,
                )
            });
        if let Some((caret_row, _)) = caret {
            self.state.follow_caret((focus, head), caret_row);
        }
        self.state.clamp_scroll();

        // 3. Render rows into a ScrollView
        let mut scroll_view =
            ScrollView::new(Size::new(content_width, self.state.layout.total_height()))
                .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
                .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (i, (item, row)) in self.list.items.iter().zip(&rows).enumerate() {
            let is_focused = i == focus;
            let selection = (is_focused && self.list.caret.has_selection())
                .then(|| self.list.caret.span());
            let lines = self.item_lines(item, row, selection, self.text_style(item, is_focused));

            let rect = Rect::new(0, self.state.layout.top_of(i), content_width, row.height());
            scroll_view.render_widget(Paragraph::new(lines), rect);
        }

        let add_row = Rect::new(0, self.state.layout.top_of(rows.len()), content_width, 1);
        scroll_view.render_widget(
            Paragraph::new(ADD_ITEM_LABEL).style(Style::default().fg(Color::DarkGray)),
            add_row,
        );

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);

        // 4. Terminal cursor at the caret, when visible
        if let Some((caret_row, caret_column)) = caret {
            let offset_y = self.state.scroll_state.offset().y;
            if caret_row >= offset_y
                && caret_row < offset_y + area.height
                && caret_column < content_width
            {
                frame.set_cursor_position(Position {
                    x: area.x + caret_column,
                    y: area.y + (caret_row - offset_y),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Item;
    use crate::test_support::buffer_text;
    use pretty_assertions::assert_eq;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(
        state: &mut ChecklistState,
        list: &ListState,
        style: CompletedStyle,
        width: u16,
        height: u16,
    ) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                Checklist::new(state, list, style, "•").render(f, f.area());
            })
            .unwrap();
        terminal
    }

    #[test]
    fn test_renders_bullets_and_add_row() {
        let list = ListState::from_texts(["Buy milk", "Walk dog"]);
        let mut state = ChecklistState::new();
        let terminal = draw(&mut state, &list, CompletedStyle::Strikethrough, 30, 6);

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("• Buy milk"));
        assert!(text.contains("• Walk dog"));
        assert!(text.contains(ADD_ITEM_LABEL));
        assert_eq!(state.layout.heights, vec![1, 1, 1]);
    }

    #[test]
    fn test_checkbox_style() {
        let list = ListState::new(vec![Item::done("Done"), Item::new("Open")]);
        let mut state = ChecklistState::new();
        let terminal = draw(&mut state, &list, CompletedStyle::Checkbox, 30, 6);

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("[x] Done"));
        assert!(text.contains("[ ] Open"));
    }

    #[test]
    fn test_completed_item_is_crossed_out() {
        let list = ListState::new(vec![Item::done("Done")]);
        let mut state = ChecklistState::new();
        let terminal = draw(&mut state, &list, CompletedStyle::Strikethrough, 30, 4);

        let cell = &terminal.backend().buffer()[(2, 0)];
        assert_eq!(cell.symbol(), "D");
        assert!(cell.modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_selection_is_reversed() {
        let list = ListState::from_texts(["abcdef"]).selecting(1, 3);
        let mut state = ChecklistState::new();
        let terminal = draw(&mut state, &list, CompletedStyle::Strikethrough, 30, 4);
        let buffer = terminal.backend().buffer();

        // "• " is two cells, so text column 1 sits at x = 3
        assert!(!buffer[(2, 0)].modifier.contains(Modifier::REVERSED));
        assert!(buffer[(3, 0)].modifier.contains(Modifier::REVERSED));
        assert!(buffer[(4, 0)].modifier.contains(Modifier::REVERSED));
        assert!(!buffer[(5, 0)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_long_item_wraps_with_indent() {
        let list = ListState::from_texts(["one two three four", "next"]);
        let mut state = ChecklistState::new();
        let terminal = draw(&mut state, &list, CompletedStyle::Strikethrough, 13, 8);

        // 13 wide: 12 content columns, 10 after the prefix
        assert_eq!(state.layout.heights, vec![2, 1, 1]);
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("• one two "));
        assert!(text.contains("  three four"));
    }

    #[test]
    fn test_cursor_at_caret() {
        let list = ListState::from_texts(["first", "second"]).focused_at(1, 3);
        let mut state = ChecklistState::new();
        let mut terminal = draw(&mut state, &list, CompletedStyle::Strikethrough, 30, 6);

        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!(cursor, Position { x: 5, y: 1 });
    }

    #[test]
    fn test_scrolls_to_focused_item() {
        let texts: Vec<String> = (0..20).map(|i| format!("item {i}")).collect();
        let list = ListState::from_texts(texts).focused_at(15, 0);
        let mut state = ChecklistState::new();
        draw(&mut state, &list, CompletedStyle::Strikethrough, 30, 5);

        let offset = state.scroll_state.offset().y;
        assert!(offset <= 15 && 15 < offset + 5);
    }

    #[test]
    fn test_hit_test() {
        let list = ListState::from_texts(["one two three four", "next"]);
        let mut state = ChecklistState::new();
        draw(&mut state, &list, CompletedStyle::Strikethrough, 13, 8);

        assert_eq!(state.hit_test(0, 0), Some(RowHit::Item(0)));
        assert_eq!(state.hit_test(4, 1), Some(RowHit::Item(0)));
        assert_eq!(state.hit_test(0, 2), Some(RowHit::Item(1)));
        assert_eq!(state.hit_test(0, 3), Some(RowHit::AddItem));
        assert_eq!(state.hit_test(0, 6), None);
        assert_eq!(state.hit_test(40, 0), None);
    }

    #[test]
    fn test_scroll_events_clamp() {
        let list = ListState::from_texts(["a", "b"]);
        let mut state = ChecklistState::new();
        draw(&mut state, &list, CompletedStyle::Strikethrough, 30, 10);

        state.handle_event(&TuiEvent::ScrollDown);
        assert_eq!(state.scroll_state.offset().y, 0);
    }
}
