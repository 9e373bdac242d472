//! # QuoteCard Component
//!
//! Pure presentational mapping from one quote to a bordered card. This is
//! the rendering collaborator the carousel (and both list pages) delegate
//! to; it holds no state and knows nothing about rotation or selection
//! order.

use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::api::Quote;
use crate::tui::component::Component;

/// Transient render wrapper: build per frame from borrowed props.
pub struct QuoteCard<'a> {
    quote: &'a Quote,
    selected: bool,
}

impl<'a> QuoteCard<'a> {
    pub fn new(quote: &'a Quote) -> Self {
        Self {
            quote,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Component for QuoteCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(card_paragraph(self.quote, self.selected), area);
    }
}

/// The card as a plain widget, shared with contexts (like a scroll view)
/// that render straight into a buffer instead of a frame.
pub fn card_paragraph(quote: &Quote, selected: bool) -> Paragraph<'_> {
    let border_style = if selected {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut lines = vec![
        Line::from(Span::styled(
            quote.title.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("By ", Style::default().fg(Color::DarkGray)),
            Span::styled(quote.author.as_str(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(Span::styled(
            format_date(&quote.created_at),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if !quote.tags.is_empty() {
        lines.push(Line::from(Span::styled(
            format_tags(&quote.tags),
            Style::default().fg(Color::Blue),
        )));
    }
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::horizontal(1));
    if quote.protected {
        block = block.title_bottom(
            Line::from(Span::styled(" protected ", Style::default().fg(Color::Yellow)))
                .right_aligned(),
        );
    }
    Paragraph::new(lines).block(block).wrap(Wrap { trim: true })
}

/// Content height (in rows) a card needs at the given inner width,
/// borders included. The list pages use this to lay cards out in a
/// scroll view.
pub fn card_height(quote: &Quote, width: u16) -> u16 {
    let inner = width.saturating_sub(4).max(1) as usize; // borders + padding
    let title_lines = textwrap::wrap(&quote.title, inner).len().max(1) as u16;
    let tag_lines = if quote.tags.is_empty() { 0 } else { 1 };
    // title + blank + author + date + tags + borders
    title_lines + 3 + tag_lines + 2
}

/// Long-form creation date, e.g. "January 5, 2025".
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ")
}
