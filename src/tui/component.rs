use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive their data as props (struct fields), usually borrowed
/// from a `ScreenSnapshot`, and render into the given `Rect`.
///
/// `render` takes `&mut self` so stateful components can update their
/// `ListState` (scroll offset) during the render pass, matching Ratatui's
/// `StatefulWidget` pattern.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
