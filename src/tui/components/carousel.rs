//! # Carousel View
//!
//! Transient render wrapper over [`core::carousel::Carousel`]. The state
//! machine decides *which* indices are visible; this component only lays
//! out that many cards side by side, with prev/next affordances when
//! there is something to cycle through.
//!
//! Follows the persistent state + transient wrapper pattern: the
//! `Carousel` lives in `App`, this wrapper is created each frame with
//! borrowed state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::api::Quote;
use crate::core::carousel::Carousel;
use crate::tui::component::Component;
use crate::tui::components::quote_card::QuoteCard;

const ARROW_WIDTH: u16 = 3;

pub struct CarouselView<'a> {
    carousel: &'a Carousel,
    quotes: &'a [Quote],
}

impl<'a> CarouselView<'a> {
    pub fn new(carousel: &'a Carousel, quotes: &'a [Quote]) -> Self {
        Self { carousel, quotes }
    }

    fn render_arrow(frame: &mut Frame, area: Rect, glyph: &str) {
        if area.height == 0 {
            return;
        }
        // Vertically centered single-row glyph.
        let mid = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new(glyph)
                .style(Style::default().fg(Color::Magenta))
                .alignment(Alignment::Center),
            mid,
        );
    }
}

impl Component for CarouselView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.quotes.is_empty() {
            let empty = Paragraph::new("No quotes available yet. Press n to share the first one.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let show_controls = self.carousel.show_controls();
        let cards_area = if show_controls {
            let [left, cards, right] = Layout::horizontal([
                Constraint::Length(ARROW_WIDTH),
                Constraint::Min(0),
                Constraint::Length(ARROW_WIDTH),
            ])
            .areas(area);
            Self::render_arrow(frame, left, "←");
            Self::render_arrow(frame, right, "→");
            cards
        } else {
            area
        };

        let indices = self.carousel.visible_indices();
        let slots =
            Layout::horizontal(vec![Constraint::Ratio(1, indices.len() as u32); indices.len()])
                .spacing(1)
                .split(cards_area);

        for (slot, index) in slots.iter().zip(indices) {
            // set_len lags one frame behind a shrinking backing list;
            // skip rather than index out of range.
            if let Some(quote) = self.quotes.get(index) {
                QuoteCard::new(quote).render(frame, *slot);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::carousel::CarouselConfig;
    use crate::core::test_support::test_quote;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    fn draw(carousel: &Carousel, quotes: &[Quote], width: u16) -> ratatui::buffer::Buffer {
        let backend = TestBackend::new(width, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| CarouselView::new(carousel, quotes).render(f, f.area()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn renders_visible_titles_only() {
        let quotes: Vec<_> = (0..4).map(|i| test_quote(&format!("q{i}"))).collect();
        let carousel = Carousel::new(4, 100, Instant::now(), CarouselConfig::default());

        let text = buffer_text(&draw(&carousel, &quotes, 100));
        assert!(text.contains("Quote q0"));
        assert!(text.contains("Quote q1"));
        assert!(!text.contains("Quote q2"));
    }

    #[test]
    fn arrows_only_when_there_is_something_to_cycle() {
        let quotes: Vec<_> = (0..2).map(|i| test_quote(&format!("q{i}"))).collect();
        let carousel = Carousel::new(2, 100, Instant::now(), CarouselConfig::default());
        let text = buffer_text(&draw(&carousel, &quotes, 100));
        assert!(!text.contains('←'));

        let quotes: Vec<_> = (0..5).map(|i| test_quote(&format!("q{i}"))).collect();
        let carousel = Carousel::new(5, 100, Instant::now(), CarouselConfig::default());
        let text = buffer_text(&draw(&carousel, &quotes, 100));
        assert!(text.contains('←'));
        assert!(text.contains('→'));
    }

    #[test]
    fn empty_collection_renders_hint_not_crash() {
        let carousel = Carousel::new(0, 100, Instant::now(), CarouselConfig::default());
        let text = buffer_text(&draw(&carousel, &[], 100));
        assert!(text.contains("No quotes available yet"));
    }

    #[test]
    fn stale_carousel_len_never_indexes_out_of_range() {
        // Carousel still believes there are 4 items; the list shrank to 1.
        let carousel = Carousel::new(4, 100, Instant::now(), CarouselConfig::default());
        let quotes = vec![test_quote("only")];
        draw(&carousel, &quotes, 100); // must not panic
    }
}
