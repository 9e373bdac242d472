//! # Application State
//!
//! Core business state for QuoteVault. This module contains domain logic
//! only - no TUI-specific types. Presentation state lives in the `tui`
//! module.
//!
//! ```text
//! App
//! ├── quotes: Vec<Quote>          // fetch-all collection from the API
//! ├── detail: Option<Quote>       // quote on the detail/edit page
//! ├── route: Route                // which page is showing
//! ├── carousel: Carousel          // home-screen rotation state
//! ├── store: QuoteStore           // injected local "your quotes" ids
//! ├── edit_token: Option<...>     // capability for a protected quote
//! ├── status_message: String      // status bar text
//! ├── is_loading: bool            // waiting for the API
//! └── error: Option<String>       // error banner
//! ```
//!
//! State changes only happen through `update(state, action, now)` in
//! action.rs. This keeps things predictable, so no surprise mutations.

use std::time::Instant;

use chrono::{Datelike, NaiveDate, Utc};

use crate::api::{EditToken, Quote};
use crate::core::carousel::Carousel;
use crate::core::config::ResolvedConfig;
use crate::core::store::QuoteStore;

/// The home carousel rotates over the most recent quotes only.
pub const RECENT_QUOTES: usize = 10;

/// Pages of the application, one variant per screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    AllQuotes,
    YourQuotes,
    AddQuote,
    EditQuote { id: String },
    QuoteDetail { id: String },
}

pub struct App {
    pub quotes: Vec<Quote>,
    pub detail: Option<Quote>,
    pub route: Route,
    pub carousel: Carousel,
    pub store: QuoteStore,
    /// Capability for the quote currently being edited/deleted, keyed by id.
    pub edit_token: Option<(String, EditToken)>,
    pub status_message: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub config: ResolvedConfig,
}

impl App {
    pub fn new(store: QuoteStore, config: ResolvedConfig, width: u16, now: Instant) -> Self {
        let carousel = Carousel::new(0, width, now, config.carousel);
        Self {
            quotes: Vec::new(),
            detail: None,
            route: Route::Home,
            carousel,
            store,
            edit_token: None,
            status_message: String::from("Welcome to QuoteVault!"),
            is_loading: false,
            error: None,
            config,
        }
    }

    /// The slice backing the home carousel: newest `RECENT_QUOTES` quotes.
    pub fn recent_quotes(&self) -> &[Quote] {
        let end = self.quotes.len().min(RECENT_QUOTES);
        &self.quotes[..end]
    }

    /// Quotes submitted from this machine, per the local store.
    pub fn your_quotes(&self) -> Vec<&Quote> {
        self.quotes
            .iter()
            .filter(|quote| self.store.contains(&quote.id))
            .collect()
    }

    /// The home page's featured quote: a deterministic daily pick, the
    /// same for everyone looking at the same collection on the same day.
    pub fn quote_of_the_day(&self) -> Option<&Quote> {
        self.quote_of_the_day_on(Utc::now().date_naive())
    }

    fn quote_of_the_day_on(&self, date: NaiveDate) -> Option<&Quote> {
        if self.quotes.is_empty() {
            return None;
        }
        let day = date.num_days_from_ce() as usize;
        self.quotes.get(day % self.quotes.len())
    }

    /// The capability token for `id`, if one has been verified.
    pub fn token_for(&self, id: &str) -> Option<&EditToken> {
        match &self.edit_token {
            Some((token_id, token)) if token_id == id => Some(token),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::test_support::{test_app, test_quote};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to QuoteVault!");
        assert!(!app.is_loading);
        assert!(app.quotes.is_empty());
        assert!(app.carousel.is_empty());
    }

    #[test]
    fn recent_quotes_caps_at_ten() {
        let mut app = test_app();
        app.quotes = (0..15).map(|i| test_quote(&format!("q{i}"))).collect();
        assert_eq!(app.recent_quotes().len(), 10);
        assert_eq!(app.recent_quotes()[0].id, "q0");
    }

    #[test]
    fn your_quotes_filters_by_store() {
        let mut app = test_app();
        app.quotes = vec![test_quote("mine"), test_quote("other")];
        app.store.remember("mine");
        let yours = app.your_quotes();
        assert_eq!(yours.len(), 1);
        assert_eq!(yours[0].id, "mine");
    }

    #[test]
    fn quote_of_the_day_is_stable_within_a_day() {
        use chrono::NaiveDate;

        let mut app = test_app();
        assert!(app.quote_of_the_day().is_none());

        app.quotes = (0..5).map(|i| test_quote(&format!("q{i}"))).collect();
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let first = app.quote_of_the_day_on(date).unwrap().id.clone();
        assert_eq!(app.quote_of_the_day_on(date).unwrap().id, first);

        let next_day = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert_ne!(app.quote_of_the_day_on(next_day).unwrap().id, first);
    }

    #[test]
    fn token_for_matches_on_id() {
        let mut app = test_app();
        app.edit_token = Some((
            "abc".to_string(),
            crate::api::EditToken { token: "tok".to_string() },
        ));
        assert!(app.token_for("abc").is_some());
        assert!(app.token_for("xyz").is_none());
    }
}
