//! Centered yes/no modal shown after the delete password is verified.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::ui::centered_rect;

pub struct ConfirmDeleteState {
    pub quote_id: String,
    pub quote_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmDeleteEvent {
    Confirm,
    Cancel,
}

impl EventHandler for ConfirmDeleteState {
    type Event = ConfirmDeleteEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ConfirmDeleteEvent> {
        match event {
            TuiEvent::InputChar('y') | TuiEvent::InputChar('Y') | TuiEvent::Submit => {
                Some(ConfirmDeleteEvent::Confirm)
            }
            TuiEvent::InputChar('n') | TuiEvent::InputChar('N') | TuiEvent::Escape => {
                Some(ConfirmDeleteEvent::Cancel)
            }
            _ => None,
        }
    }
}

pub struct ConfirmDelete<'a> {
    state: &'a ConfirmDeleteState,
}

impl<'a> ConfirmDelete<'a> {
    pub fn new(state: &'a ConfirmDeleteState) -> Self {
        Self { state }
    }
}

impl Component for ConfirmDelete<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(50, 25, area);
        frame.render_widget(Clear, popup);

        let lines = vec![
            Line::from(vec![
                Span::raw("Delete \""),
                Span::styled(
                    self.state.quote_title.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("\"?"),
            ]),
            Line::default(),
            Line::from(Span::styled(
                "This cannot be undone.",
                Style::default().fg(Color::Red),
            )),
        ];

        let dialog = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    .title(" Confirm delete ")
                    .title_bottom(Line::from(" y Delete  n Cancel ").centered())
                    .padding(Padding::uniform(1)),
            );
        frame.render_widget(dialog, popup);
    }
}
