//! # QuoteForm Component
//!
//! The Add/Edit page: five fields (title, author, explanation, tags,
//! password), Tab-cycled focus, masked password entry, and required-field
//! validation on submit. One configurable component serves both modes.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::api::{Quote, parse_tags};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit { id: String },
}

/// Field positions, in focus order.
const TITLE: usize = 0;
const AUTHOR: usize = 1;
const CONTENT: usize = 2;
const TAGS: usize = 3;
const PASSWORD: usize = 4;
const FIELD_COUNT: usize = 5;

struct Field {
    label: &'static str,
    value: String,
    required: bool,
    masked: bool,
    multiline: bool,
}

impl Field {
    fn new(label: &'static str, required: bool) -> Self {
        Self {
            label,
            value: String::new(),
            required,
            masked: false,
            multiline: false,
        }
    }
}

/// Values collected from a validated submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormData {
    pub title: String,
    pub author: String,
    pub content: String,
    pub tags: Vec<String>,
    /// Trimmed; `None` when the field was left empty.
    pub password: Option<String>,
}

/// High-level events emitted by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Submit(FormData),
    Cancel,
}

pub struct QuoteForm {
    pub mode: FormMode,
    fields: [Field; FIELD_COUNT],
    focus: usize,
    error: Option<String>,
}

impl QuoteForm {
    /// Blank form for a new quote. `default_author` comes from config.
    pub fn add(default_author: Option<&str>) -> Self {
        let mut form = Self::blank(FormMode::Add, "Password (optional)");
        if let Some(author) = default_author {
            form.fields[AUTHOR].value = author.to_string();
        }
        form
    }

    /// Form pre-filled from an existing quote. The password field sets a
    /// new password; the current one was already verified upstream.
    pub fn edit(quote: &Quote) -> Self {
        let mut form = Self::blank(
            FormMode::Edit { id: quote.id.clone() },
            "New password (optional)",
        );
        form.fields[TITLE].value = quote.title.clone();
        form.fields[AUTHOR].value = quote.author.clone();
        form.fields[CONTENT].value = quote.content.clone();
        form.fields[TAGS].value = quote.tags.join(", ");
        form
    }

    fn blank(mode: FormMode, password_label: &'static str) -> Self {
        let mut fields = [
            Field::new("Quote*", true),
            Field::new("Author*", true),
            Field::new("Explanation*", true),
            Field::new("Tags* (comma separated)", true),
            Field::new(password_label, false),
        ];
        fields[CONTENT].multiline = true;
        fields[PASSWORD].masked = true;
        Self {
            mode,
            fields,
            focus: TITLE,
            error: None,
        }
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FIELD_COUNT;
    }

    fn focus_prev(&mut self) {
        self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT;
    }

    fn try_submit(&mut self) -> Option<FormEvent> {
        for field in self.fields.iter().filter(|f| f.required) {
            if field.value.trim().is_empty() {
                self.error = Some(format!(
                    "{} is required",
                    field.label.trim_end_matches('*')
                ));
                return None;
            }
        }
        self.error = None;
        let password = self.fields[PASSWORD].value.trim();
        Some(FormEvent::Submit(FormData {
            title: self.fields[TITLE].value.trim().to_string(),
            author: self.fields[AUTHOR].value.trim().to_string(),
            content: self.fields[CONTENT].value.trim().to_string(),
            tags: parse_tags(&self.fields[TAGS].value),
            password: if password.is_empty() {
                None
            } else {
                Some(password.to_string())
            },
        }))
    }
}

impl EventHandler for QuoteForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        match event {
            TuiEvent::Escape => Some(FormEvent::Cancel),
            TuiEvent::Tab | TuiEvent::CursorDown => {
                self.focus_next();
                None
            }
            TuiEvent::BackTab | TuiEvent::CursorUp => {
                self.focus_prev();
                None
            }
            TuiEvent::InputChar(c) => {
                let field = &mut self.fields[self.focus];
                if *c != '\n' || field.multiline {
                    field.value.push(*c);
                }
                None
            }
            TuiEvent::Paste(data) => {
                let field = &mut self.fields[self.focus];
                if field.multiline {
                    field.value.push_str(data);
                } else {
                    field.value.push_str(&data.replace('\n', " "));
                }
                None
            }
            TuiEvent::Backspace => {
                self.fields[self.focus].value.pop();
                None
            }
            // Enter inside the explanation inserts a newline; anywhere
            // else it submits the form.
            TuiEvent::Submit => {
                if self.fields[self.focus].multiline {
                    self.fields[self.focus].value.push('\n');
                    None
                } else {
                    self.try_submit()
                }
            }
            _ => None,
        }
    }
}

impl Component for QuoteForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = match &self.mode {
            FormMode::Add => " Share a New Quote ",
            FormMode::Edit { .. } => " Edit Quote ",
        };
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title)
            .title_bottom(
                Line::from(" Tab Next field  Enter Submit  Ctrl+J Newline  Esc Cancel ")
                    .centered(),
            );
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        // Single-line fields get 3 rows (borders included); the
        // explanation takes whatever is left; one row for errors.
        let [title_a, author_a, content_a, tags_a, password_a, error_a] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(inner);
        let areas = [title_a, author_a, content_a, tags_a, password_a];

        for (index, (field, field_area)) in self.fields.iter().zip(areas).enumerate() {
            render_field(frame, field, field_area, index == self.focus);
        }

        if let Some(error) = &self.error {
            frame.render_widget(
                Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
                error_a,
            );
        }
    }
}

fn render_field(frame: &mut Frame, field: &Field, area: Rect, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut display = if field.masked {
        "*".repeat(field.value.chars().count())
    } else {
        field.value.clone()
    };
    if focused {
        display.push('▏');
    }

    // Single-line fields show the tail when the value overflows.
    let inner_width = area.width.saturating_sub(2) as usize;
    if !field.multiline && display.width() > inner_width {
        let mut tail = display.as_str();
        while tail.width() > inner_width {
            let mut chars = tail.chars();
            chars.next();
            tail = chars.as_str();
        }
        display = tail.to_string();
    }

    let paragraph = Paragraph::new(display)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(field.label),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::test_quote;

    fn type_str(form: &mut QuoteForm, text: &str) {
        for c in text.chars() {
            form.handle_event(&TuiEvent::InputChar(c));
        }
    }

    fn fill_required(form: &mut QuoteForm) {
        type_str(form, "Stay hungry"); // title
        form.handle_event(&TuiEvent::Tab);
        type_str(form, "S. Jobs"); // author
        form.handle_event(&TuiEvent::Tab);
        type_str(form, "Keep learning."); // explanation
        form.handle_event(&TuiEvent::Tab);
        type_str(form, "motivation, life"); // tags
        form.handle_event(&TuiEvent::Tab); // password
    }

    #[test]
    fn submit_collects_trimmed_fields_and_parsed_tags() {
        let mut form = QuoteForm::add(None);
        fill_required(&mut form);

        let event = form.handle_event(&TuiEvent::Submit).expect("submits");
        match event {
            FormEvent::Submit(data) => {
                assert_eq!(data.title, "Stay hungry");
                assert_eq!(data.tags, vec!["motivation", "life"]);
                assert_eq!(data.password, None);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn empty_required_field_blocks_submit_with_message() {
        let mut form = QuoteForm::add(None);
        assert_eq!(form.handle_event(&TuiEvent::Submit), None);
        assert!(form.error.as_ref().unwrap().contains("Quote"));
    }

    #[test]
    fn blank_password_becomes_none_nonblank_is_trimmed() {
        let mut form = QuoteForm::add(None);
        fill_required(&mut form);
        type_str(&mut form, "  hunter2  ");
        // Enter from the password field submits.
        match form.handle_event(&TuiEvent::Submit).unwrap() {
            FormEvent::Submit(data) => assert_eq!(data.password.as_deref(), Some("hunter2")),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn enter_in_explanation_inserts_newline_instead_of_submitting() {
        let mut form = QuoteForm::add(None);
        form.handle_event(&TuiEvent::Tab);
        form.handle_event(&TuiEvent::Tab); // focus explanation
        type_str(&mut form, "line one");
        assert_eq!(form.handle_event(&TuiEvent::Submit), None);
        type_str(&mut form, "line two");
        assert_eq!(form.fields[CONTENT].value, "line one\nline two");
    }

    #[test]
    fn edit_mode_prefills_from_the_quote() {
        let quote = test_quote("abc");
        let form = QuoteForm::edit(&quote);
        assert_eq!(form.mode, FormMode::Edit { id: "abc".to_string() });
        assert_eq!(form.fields[TITLE].value, quote.title);
        assert_eq!(form.fields[TAGS].value, "wisdom");
    }

    #[test]
    fn add_mode_prefills_the_configured_author() {
        let form = QuoteForm::add(Some("Ada"));
        assert_eq!(form.fields[AUTHOR].value, "Ada");
    }

    #[test]
    fn focus_wraps_both_directions() {
        let mut form = QuoteForm::add(None);
        form.handle_event(&TuiEvent::BackTab);
        assert_eq!(form.focus, PASSWORD);
        form.handle_event(&TuiEvent::Tab);
        assert_eq!(form.focus, TITLE);
    }

    #[test]
    fn escape_cancels() {
        let mut form = QuoteForm::add(None);
        assert_eq!(form.handle_event(&TuiEvent::Escape), Some(FormEvent::Cancel));
    }
}
