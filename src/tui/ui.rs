//! # UI Rendering
//!
//! Maps the current `Route` to a page of components. Pure presentation:
//! reads `App` and `TuiState`, renders, mutates nothing but per-frame
//! scroll caches.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::{App, Route};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::carousel::CarouselView;
use crate::tui::components::confirm_delete::ConfirmDelete;
use crate::tui::components::password_prompt::PasswordPrompt;
use crate::tui::components::quote_card::QuoteCard;
use crate::tui::components::quote_detail::QuoteDetail;
use crate::tui::components::quote_list::QuoteList;
use crate::tui::components::title_bar::TitleBar;

/// Centered sub-rectangle taking the given percentages of `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [_, vertical, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(r);
    let [_, horizontal, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(vertical);
    horizontal
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let [title_area, main_area, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    TitleBar::new(
        &app.route,
        &app.status_message,
        app.error.as_deref(),
        app.is_loading,
    )
    .render(frame, title_area);

    match &app.route {
        Route::Home => draw_home(frame, app, main_area),
        Route::AllQuotes => {
            let refs: Vec<&_> = app.quotes.iter().collect();
            QuoteList::new(
                &mut tui.all_list,
                &refs,
                "No quotes yet. Press n to share the first one.",
            )
            .render(frame, main_area);
        }
        Route::YourQuotes => {
            let yours = app.your_quotes();
            QuoteList::new(
                &mut tui.your_list,
                &yours,
                "You haven't shared any quotes from this machine yet.",
            )
            .render(frame, main_area);
        }
        Route::QuoteDetail { .. } => match &app.detail {
            Some(quote) => QuoteDetail::new(quote).render(frame, main_area),
            None => draw_loading(frame, main_area),
        },
        Route::AddQuote | Route::EditQuote { .. } => match &mut tui.form {
            Some(form) => form.render(frame, main_area),
            None => draw_loading(frame, main_area),
        },
    }

    // Overlays render last, over whatever page is showing.
    if let Some(prompt) = &tui.password_prompt {
        PasswordPrompt::new(prompt).render(frame, frame.area());
    }
    if let Some(confirm) = &tui.confirm_delete {
        ConfirmDelete::new(confirm).render(frame, frame.area());
    }

    frame.render_widget(
        Paragraph::new(help_line(&app.route))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        help_area,
    );
}

fn draw_home(frame: &mut Frame, app: &App, area: Rect) {
    let [hero_area, qotd_area, carousel_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(9),
        Constraint::Min(0),
    ])
    .areas(area);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            "Words worth keeping",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Recently shared quotes rotate below.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(hero, hero_area);

    if let Some(quote) = app.quote_of_the_day() {
        let [label_area, card_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(qotd_area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Quote of the Day",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            label_area,
        );
        QuoteCard::new(quote).render(frame, card_area);
    }

    CarouselView::new(&app.carousel, app.recent_quotes()).render(frame, carousel_area);
}

fn draw_loading(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new("Loading…")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        area,
    );
}

fn help_line(route: &Route) -> &'static str {
    match route {
        Route::Home => " 1 Home  2 All  3 Yours  n New  ←/→ Rotate  r Refresh  q Quit ",
        Route::AllQuotes | Route::YourQuotes => {
            " ↑/↓ Select  Enter Open  r Refresh  1/2/3 Pages  n New  q Quit "
        }
        Route::QuoteDetail { .. } => " e Edit  d Delete  Esc Back  q Quit ",
        Route::AddQuote | Route::EditQuote { .. } => {
            " Tab Next field  Enter Submit  Esc Cancel "
        }
    }
}
