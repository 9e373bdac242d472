//! # QuoteList Component
//!
//! Scrollable card list backing the AllQuotes and YourQuotes pages.
//! Cards have uneven heights (titles wrap), so the list lays them out in
//! a `ScrollView` and caches per-card heights for keyboard navigation.
//!
//! Persistent state + transient wrapper: `QuoteListState` lives in
//! `TuiState`, `QuoteList` is created each frame with borrowed state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::Quote;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::quote_card::{card_height, card_paragraph};
use crate::tui::event::TuiEvent;

/// Persistent state for a card list page.
pub struct QuoteListState {
    pub selected: usize,
    pub scroll_state: ScrollViewState,
    /// Card heights cached during the last render, for scroll math.
    heights: Vec<u16>,
    viewport_height: u16,
}

impl QuoteListState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            scroll_state: ScrollViewState::default(),
            heights: Vec::new(),
            viewport_height: 0,
        }
    }

    /// Clamp the cursor after the backing list changed size.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(len - 1);
        }
    }

    /// Total content height, saturating at the `u16` ceiling so very
    /// large collections degrade to a clamped scroll area instead of
    /// overflowing.
    fn total_height(&self) -> u16 {
        self.heights
            .iter()
            .fold(0u16, |acc, height| acc.saturating_add(*height))
    }

    /// Adjust the scroll offset so the selected card is fully visible.
    fn scroll_to_selected(&mut self) {
        if self.viewport_height == 0 || self.selected >= self.heights.len() {
            return;
        }
        let top = self.heights[..self.selected]
            .iter()
            .fold(0u16, |acc, height| acc.saturating_add(*height));
        let bottom = top.saturating_add(self.heights[self.selected]);
        let mut offset = self.scroll_state.offset();
        if top < offset.y {
            offset.y = top;
        } else if bottom > offset.y + self.viewport_height {
            offset.y = bottom.saturating_sub(self.viewport_height);
        }
        self.scroll_state.set_offset(offset);
    }
}

impl Default for QuoteListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteListEvent {
    /// Open the detail page for the card at this position.
    Open(usize),
}

impl EventHandler for QuoteListState {
    type Event = QuoteListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<QuoteListEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.scroll_to_selected();
                None
            }
            TuiEvent::CursorDown => {
                if !self.heights.is_empty() {
                    self.selected = (self.selected + 1).min(self.heights.len() - 1);
                    self.scroll_to_selected();
                }
                None
            }
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                None
            }
            TuiEvent::PageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::PageDown => {
                self.scroll_state.scroll_page_down();
                None
            }
            TuiEvent::Submit if !self.heights.is_empty() => {
                Some(QuoteListEvent::Open(self.selected))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for a list page.
pub struct QuoteList<'a> {
    state: &'a mut QuoteListState,
    quotes: &'a [&'a Quote],
    empty_hint: &'a str,
}

impl<'a> QuoteList<'a> {
    pub fn new(state: &'a mut QuoteListState, quotes: &'a [&'a Quote], empty_hint: &'a str) -> Self {
        Self {
            state,
            quotes,
            empty_hint,
        }
    }
}

impl Component for QuoteList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.quotes.is_empty() {
            let empty = Paragraph::new(self.empty_hint)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            self.state.heights.clear();
            return;
        }

        let content_width = area.width.saturating_sub(1);
        self.state.heights = self
            .quotes
            .iter()
            .map(|quote| card_height(quote, content_width))
            .collect();
        self.state.viewport_height = area.height;
        self.state.clamp(self.quotes.len());

        let total_height = self.state.total_height();
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (index, quote) in self.quotes.iter().enumerate() {
            let height = self.state.heights[index];
            let card_rect = Rect::new(0, y_offset, content_width, height);
            let selected = index == self.state.selected;
            scroll_view.render_widget(card_paragraph(quote, selected), card_rect);
            y_offset = y_offset.saturating_add(height);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::test_quote;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn cursor_stays_in_bounds() {
        let mut state = QuoteListState::new();
        state.heights = vec![6, 6, 6];

        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);

        for _ in 0..10 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn submit_opens_the_selected_card() {
        let mut state = QuoteListState::new();
        state.heights = vec![6, 6];
        state.selected = 1;
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(QuoteListEvent::Open(1))
        );
    }

    #[test]
    fn submit_on_empty_list_is_inert() {
        let mut state = QuoteListState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn clamp_handles_shrinking_lists() {
        let mut state = QuoteListState::new();
        state.selected = 5;
        state.clamp(2);
        assert_eq!(state.selected, 1);
        state.clamp(0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn huge_lists_clamp_instead_of_overflowing_height_math() {
        let mut state = QuoteListState::new();
        // Enough 6-row cards to blow well past u16::MAX total height.
        state.heights = vec![6; 20_000];
        state.viewport_height = 20;
        assert_eq!(state.total_height(), u16::MAX);

        state.selected = 19_999;
        state.scroll_to_selected(); // must not panic
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 19_999);
    }

    #[test]
    fn render_smoke() {
        let quotes: Vec<_> = (0..3).map(|i| test_quote(&format!("q{i}"))).collect();
        let refs: Vec<&_> = quotes.iter().collect();
        let mut state = QuoteListState::new();

        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| QuoteList::new(&mut state, &refs, "empty").render(f, f.area()))
            .unwrap();
        assert_eq!(state.heights.len(), 3);
    }
}
