//! Crossterm → `TuiEvent` translation.
//!
//! The raw terminal stream is reduced to the handful of events the rest
//! of the TUI cares about. Mouse press/release pairs are kept separate
//! here; the event loop reduces them to a horizontal swipe delta for the
//! carousel.

use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    /// Ctrl+C: quit regardless of mode.
    ForceQuit,
    Escape,
    Submit,
    InputChar(char),
    Paste(String), // Bracketed paste - preserves newlines
    Backspace,
    Tab,
    BackTab,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    PageUp,
    PageDown,
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    MouseDown(u16, u16),
    MouseUp(u16, u16),
    MouseMove(u16, u16),
    ScrollUp,
    ScrollDown,
}

impl TuiEvent {
    /// Whether this event counts as user activity for the carousel's
    /// inactivity debounce (key-down, pointer-down, pointer-move).
    pub fn is_activity(&self) -> bool {
        !matches!(self, TuiEvent::Resize(_, _))
    }
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                // Ctrl+J inserts newline (ASCII LF; Ctrl+Enter sends this in most terminals)
                (KeyModifiers::CONTROL, KeyCode::Char('j')) => Some(TuiEvent::InputChar('\n')),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Tab) => Some(TuiEvent::Tab),
                (_, KeyCode::BackTab) => Some(TuiEvent::BackTab),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                (_, KeyCode::PageUp) => Some(TuiEvent::PageUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::PageDown),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(_) => {
                Some(TuiEvent::MouseDown(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::Up(_) => Some(TuiEvent::MouseUp(mouse_event.column, mouse_event.row)),
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                Some(TuiEvent::MouseMove(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(cols, rows) => Some(TuiEvent::Resize(cols, rows)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_is_not_activity() {
        assert!(!TuiEvent::Resize(80, 24).is_activity());
        assert!(TuiEvent::InputChar('x').is_activity());
        assert!(TuiEvent::MouseDown(1, 1).is_activity());
        assert!(TuiEvent::MouseMove(1, 1).is_activity());
    }
}
