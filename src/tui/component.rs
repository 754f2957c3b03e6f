use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow the React pattern:
/// - They receive data via props (struct fields).
/// - They render to a `Frame` within a given `Rect`.
///
/// `render` takes `&mut self` so a component may cache layout work
/// computed during the render pass.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
