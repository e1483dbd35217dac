use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data as props (struct fields), may borrow persistent
/// state through `&mut` fields, and render into a `Rect` of the frame.
///
/// `render` takes `&mut self` so a component can refresh its layout cache
/// and scroll offset during the render pass, the same way a ratatui
/// `StatefulWidget` does.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that reacts to terminal events.
pub trait EventHandler {
    /// The higher-level event this component emits, if any.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a higher-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
