//! # PasswordPrompt Overlay
//!
//! Centered modal asking for a quote's password before an edit or
//! delete. The typed password never echoes; it travels to the server in
//! a verify request and an edit token comes back. A rejected attempt
//! keeps the prompt open with the error shown.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::action::GateIntent;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::ui::centered_rect;

/// Persistent overlay state; present in `TuiState` only while the
/// prompt is open.
pub struct PasswordPromptState {
    pub quote_id: String,
    pub intent: GateIntent,
    input: String,
    pub error: Option<String>,
}

impl PasswordPromptState {
    pub fn new(quote_id: String, intent: GateIntent) -> Self {
        Self {
            quote_id,
            intent,
            input: String::new(),
            error: None,
        }
    }

    /// Called when the server rejects the password. The stale input is
    /// cleared so the user starts over.
    pub fn reject(&mut self, message: String) {
        self.error = Some(message);
        self.input.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordPromptEvent {
    Submit(String),
    Cancel,
}

impl EventHandler for PasswordPromptState {
    type Event = PasswordPromptEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PasswordPromptEvent> {
        match event {
            TuiEvent::Escape => Some(PasswordPromptEvent::Cancel),
            TuiEvent::Submit => {
                if self.input.is_empty() {
                    None
                } else {
                    Some(PasswordPromptEvent::Submit(std::mem::take(&mut self.input)))
                }
            }
            TuiEvent::InputChar(c) if *c != '\n' => {
                self.input.push(*c);
                None
            }
            TuiEvent::Paste(data) => {
                self.input.push_str(data.trim_end_matches('\n'));
                None
            }
            TuiEvent::Backspace => {
                self.input.pop();
                None
            }
            _ => None,
        }
    }
}

pub struct PasswordPrompt<'a> {
    state: &'a PasswordPromptState,
}

impl<'a> PasswordPrompt<'a> {
    pub fn new(state: &'a PasswordPromptState) -> Self {
        Self { state }
    }
}

impl Component for PasswordPrompt<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(50, 20, area);
        frame.render_widget(Clear, popup);

        let title = match self.state.intent {
            GateIntent::Edit => " Password required to edit ",
            GateIntent::Delete => " Password required to delete ",
        };

        let mut masked = "*".repeat(self.state.input.chars().count());
        masked.push('▏');
        let mut lines = vec![Line::from(masked)];
        if let Some(error) = &self.state.error {
            lines.push(Line::default());
            lines.push(Line::styled(
                error.as_str(),
                Style::default().fg(Color::Red),
            ));
        }

        let prompt = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
                .title(title)
                .title_bottom(Line::from(" Enter Verify  Esc Cancel ").centered())
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(prompt, popup);
    }
}
