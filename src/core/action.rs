//! # Actions
//!
//! Everything that can happen in QuoteVault becomes an `Action`.
//! User opens the detail page? That's `Action::Navigate(Route::QuoteDetail)`.
//! The API answers? That's `Action::QuotesLoaded(result)`.
//!
//! The `update()` function takes the current state, an action, and the
//! current instant, mutates the state, and returns an `Effect` telling
//! the caller what I/O to perform. No I/O happens here.
//!
//! ```text
//! State + Action + now  →  update()  →  State' + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on state and
//! effects. Network results arrive as `Result<_, String>`; the spawned
//! tasks format errors before sending them back over the channel.

use std::time::Instant;

use log::info;

use crate::api::{EditToken, NewQuote, Quote, QuoteUpdate};
use crate::core::state::{App, Route};

/// What a verified password is for: opening the edit form or deleting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateIntent {
    Edit,
    Delete,
}

#[derive(Debug)]
pub enum Action {
    Navigate(Route),
    /// Re-fetch the collection for the current page.
    Refresh,
    QuotesLoaded(Result<Vec<Quote>, String>),
    QuoteLoaded(Result<Quote, String>),
    CreateQuote(NewQuote),
    QuoteCreated(Result<Quote, String>),
    UpdateQuote { id: String, update: QuoteUpdate },
    QuoteUpdated(Result<Quote, String>),
    VerifyPassword { id: String, password: String, intent: GateIntent },
    PasswordVerified { id: String, result: Result<EditToken, String>, intent: GateIntent },
    DeleteQuote { id: String },
    QuoteDeleted { id: String, result: Result<(), String> },
    // Carousel interactions (home page)
    CarouselNext,
    CarouselPrev,
    CarouselSwipe(i32),
    ViewportResized(u16),
    /// Qualifying user interaction: defers the carousel auto-advance.
    Activity,
    /// Event-loop heartbeat: fires the auto-advance when due.
    Tick,
    Quit,
}

/// I/O the event loop must perform after an `update()`.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    Quit,
    FetchQuotes,
    FetchQuote(String),
    SpawnCreate(NewQuote),
    SpawnUpdate { id: String, update: QuoteUpdate, token: Option<EditToken> },
    SpawnDelete { id: String, token: Option<EditToken> },
    SpawnVerify { id: String, password: String, intent: GateIntent },
    /// Password accepted for a delete: the UI should ask for confirmation.
    ConfirmDelete(String),
    /// Password rejected: the UI keeps the prompt open and shows this.
    PasswordRejected(String),
}

/// Keep the carousel's view of the collection in sync after any change
/// to the backing list.
fn sync_carousel(app: &mut App, now: Instant) {
    let len = app.recent_quotes().len();
    app.carousel.set_len(len, now);
}

pub fn update(app: &mut App, action: Action, now: Instant) -> Effect {
    match action {
        Action::Navigate(route) => {
            info!("Navigate: {:?}", route);
            app.error = None;
            let effect = match &route {
                Route::Home | Route::AllQuotes | Route::YourQuotes => {
                    app.is_loading = true;
                    Effect::FetchQuotes
                }
                Route::QuoteDetail { id } | Route::EditQuote { id } => {
                    app.is_loading = true;
                    Effect::FetchQuote(id.clone())
                }
                Route::AddQuote => Effect::None,
            };
            app.route = route;
            effect
        }

        Action::Refresh => {
            app.error = None;
            app.is_loading = true;
            Effect::FetchQuotes
        }

        Action::QuotesLoaded(result) => {
            app.is_loading = false;
            match result {
                Ok(quotes) => {
                    app.quotes = quotes;
                    sync_carousel(app, now);
                }
                Err(e) => {
                    app.error = Some(format!("Failed to fetch quotes: {e}"));
                }
            }
            Effect::None
        }

        Action::QuoteLoaded(result) => {
            app.is_loading = false;
            match result {
                Ok(quote) => {
                    app.detail = Some(quote);
                    Effect::None
                }
                Err(e) => {
                    // A missing quote bounces back to the full list.
                    app.error = Some(format!("Quote not found: {e}"));
                    app.route = Route::AllQuotes;
                    app.is_loading = true;
                    Effect::FetchQuotes
                }
            }
        }

        Action::CreateQuote(quote) => {
            if app.is_loading {
                return Effect::None;
            }
            app.is_loading = true;
            Effect::SpawnCreate(quote)
        }

        Action::QuoteCreated(result) => {
            app.is_loading = false;
            match result {
                Ok(quote) => {
                    app.error = None;
                    app.store.remember(&quote.id);
                    app.quotes.insert(0, quote);
                    sync_carousel(app, now);
                    app.status_message = String::from("New quote added!");
                    app.route = Route::YourQuotes;
                    app.is_loading = true;
                    Effect::FetchQuotes
                }
                Err(e) => {
                    app.error = Some(format!("Error creating quote: {e}"));
                    Effect::None
                }
            }
        }

        Action::UpdateQuote { id, update } => {
            if app.is_loading {
                return Effect::None;
            }
            app.is_loading = true;
            let token = app.token_for(&id).cloned();
            Effect::SpawnUpdate { id, update, token }
        }

        Action::QuoteUpdated(result) => {
            app.is_loading = false;
            match result {
                Ok(quote) => {
                    if let Some(existing) =
                        app.quotes.iter_mut().find(|q| q.id == quote.id)
                    {
                        *existing = quote.clone();
                    }
                    app.edit_token = None; // single-use capability
                    app.error = None;
                    app.status_message = String::from("Quote updated!");
                    app.route = Route::QuoteDetail { id: quote.id.clone() };
                    app.detail = Some(quote);
                    Effect::None
                }
                Err(e) => {
                    app.error = Some(format!("Error updating quote: {e}"));
                    Effect::None
                }
            }
        }

        Action::VerifyPassword { id, password, intent } => {
            app.is_loading = true;
            Effect::SpawnVerify { id, password, intent }
        }

        Action::PasswordVerified { id, result, intent } => {
            app.is_loading = false;
            match result {
                Ok(token) => {
                    app.edit_token = Some((id.clone(), token));
                    match intent {
                        GateIntent::Edit => {
                            app.route = Route::EditQuote { id };
                            Effect::None
                        }
                        GateIntent::Delete => Effect::ConfirmDelete(id),
                    }
                }
                Err(e) => Effect::PasswordRejected(e),
            }
        }

        Action::DeleteQuote { id } => {
            app.is_loading = true;
            let token = app.token_for(&id).cloned();
            Effect::SpawnDelete { id, token }
        }

        Action::QuoteDeleted { id, result } => {
            app.is_loading = false;
            match result {
                Ok(()) => {
                    app.quotes.retain(|q| q.id != id);
                    app.store.forget(&id);
                    app.detail = None;
                    app.edit_token = None;
                    sync_carousel(app, now);
                    app.error = None;
                    app.status_message = String::from("Quote deleted!");
                    app.route = Route::AllQuotes;
                }
                Err(e) => {
                    app.error = Some(format!("Error deleting quote: {e}"));
                }
            }
            Effect::None
        }

        Action::CarouselNext => {
            app.carousel.advance(now);
            Effect::None
        }
        Action::CarouselPrev => {
            app.carousel.retreat(now);
            Effect::None
        }
        Action::CarouselSwipe(delta_x) => {
            app.carousel.on_swipe(delta_x, now);
            Effect::None
        }
        Action::ViewportResized(width) => {
            app.carousel.on_resize(width);
            Effect::None
        }
        Action::Activity => {
            app.carousel.note_activity(now);
            Effect::None
        }
        Action::Tick => {
            app.carousel.poll_timer(now);
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}
