use ratatui::Frame;
use ratatui::layout::Rect;

/// Anything that can paint itself into a region of the frame.
///
/// Two shapes of component implement this:
/// - transient wrappers (a card, the carousel view) built fresh each
///   frame from borrowed data;
/// - stateful pages (the lists, the form) whose `*State` struct lives in
///   `TuiState` across frames.
///
/// `render` takes `&mut self` because the stateful kind updates caches
/// during the pass, e.g. the list's per-card heights and scroll offset.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Input half of a component: reduce a raw [`TuiEvent`] to the
/// component's own event type, or swallow it.
///
/// Returning `Some` hands the event loop something meaningful ("open
/// card 3", "submit this form"); returning `None` means the component
/// consumed the input as internal state changes, or ignored it.
///
/// [`TuiEvent`]: super::event::TuiEvent
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
