//! # QuoteDetail Component
//!
//! Full view of a single quote: title, author, creation date, tags, and
//! the explanation text, with the edit/delete hints in the footer.
//! Stateless: everything comes in as props.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::api::Quote;
use crate::tui::component::Component;
use crate::tui::components::quote_card::format_date;

pub struct QuoteDetail<'a> {
    quote: &'a Quote,
}

impl<'a> QuoteDetail<'a> {
    pub fn new(quote: &'a Quote) -> Self {
        Self { quote }
    }
}

impl Component for QuoteDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                self.quote.title.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("By ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    self.quote.author.as_str(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled("  •  Created ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format_date(&self.quote.created_at),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ];

        if !self.quote.tags.is_empty() {
            lines.push(Line::from(
                self.quote
                    .tags
                    .iter()
                    .map(|tag| Span::styled(format!("#{tag} "), Style::default().fg(Color::Blue)))
                    .collect::<Vec<_>>(),
            ));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Explanation",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::UNDERLINED),
        )));
        for content_line in self.quote.content.lines() {
            lines.push(Line::from(content_line));
        }

        let title = if self.quote.protected {
            " Quote  protected "
        } else {
            " Quote "
        };
        let detail = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(title)
                    .title_alignment(Alignment::Left)
                    .title_bottom(Line::from(" e Edit  d Delete  Esc Back ").centered())
                    .padding(Padding::horizontal(2)),
            )
            .wrap(Wrap { trim: false });

        frame.render_widget(detail, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::test_quote;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(quote: &Quote) -> String {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| QuoteDetail::new(quote).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_all_quote_fields() {
        let quote = test_quote("a");
        let text = buffer_text(&quote);
        assert!(text.contains("Quote a"));
        assert!(text.contains("Anon"));
        assert!(text.contains("Some wise words."));
        assert!(text.contains("#wisdom"));
    }

    #[test]
    fn protected_quotes_are_flagged_in_the_title() {
        let mut quote = test_quote("a");
        quote.protected = true;
        assert!(buffer_text(&quote).contains("protected"));
    }
}
