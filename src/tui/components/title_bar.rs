//! One-row header: app name, page tabs, and the status/error readout.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::Route;
use crate::tui::component::Component;

pub struct TitleBar<'a> {
    route: &'a Route,
    status: &'a str,
    error: Option<&'a str>,
    is_loading: bool,
}

impl<'a> TitleBar<'a> {
    pub fn new(route: &'a Route, status: &'a str, error: Option<&'a str>, is_loading: bool) -> Self {
        Self {
            route,
            status,
            error,
            is_loading,
        }
    }

    fn tab(&self, label: &'static str, active: bool) -> Span<'static> {
        if active {
            Span::styled(
                label,
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
        } else {
            Span::styled(label, Style::default().fg(Color::DarkGray))
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [tabs_area, status_area] =
            Layout::horizontal([Constraint::Min(40), Constraint::Percentage(40)]).areas(area);

        // Detail and edit pages belong to no tab; highlight nothing.
        let tabs = Line::from(vec![
            Span::styled(
                " QuoteVault ",
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            self.tab("1 Home", matches!(self.route, Route::Home)),
            Span::raw("  "),
            self.tab("2 All Quotes", matches!(self.route, Route::AllQuotes)),
            Span::raw("  "),
            self.tab("3 Your Quotes", matches!(self.route, Route::YourQuotes)),
            Span::raw("  "),
            self.tab("n Add", matches!(self.route, Route::AddQuote)),
        ]);
        frame.render_widget(Paragraph::new(tabs), tabs_area);

        let status = if self.is_loading {
            Span::styled("Loading…", Style::default().fg(Color::Yellow))
        } else if let Some(error) = self.error {
            Span::styled(error, Style::default().fg(Color::Red))
        } else {
            Span::styled(self.status, Style::default().fg(Color::DarkGray))
        };
        frame.render_widget(
            Paragraph::new(Line::from(status).right_aligned()),
            status_area,
        );
    }
}
