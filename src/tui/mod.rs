//! # Terminal UI
//!
//! Owns the terminal, the event loop, and the presentation-only state
//! (list cursors, the open form, modal overlays). The loop follows the
//! one-way cycle:
//!
//! ```text
//! draw → poll input → TuiEvent → Action → update() → Effect → spawn I/O
//!                                   ↑                            │
//!                                   └── mpsc channel ←───────────┘
//! ```
//!
//! API calls run on tokio tasks and report back as `Action`s over a
//! channel, so the loop itself never blocks on the network.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{error, warn};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::api::{NewQuote, QuoteClient, QuoteUpdate};
use crate::core::action::{Action, Effect, GateIntent, update};
use crate::core::config::{ResolvedConfig, store_path};
use crate::core::state::{App, Route};
use crate::core::store::{FileStore, KvStore, MemoryStore, QuoteStore};
use crate::tui::component::EventHandler;
use crate::tui::components::confirm_delete::{ConfirmDeleteEvent, ConfirmDeleteState};
use crate::tui::components::password_prompt::{PasswordPromptEvent, PasswordPromptState};
use crate::tui::components::quote_form::{FormData, FormEvent, FormMode, QuoteForm};
use crate::tui::components::quote_list::{QuoteListEvent, QuoteListState};
use crate::tui::event::{TuiEvent, poll_event_timeout};
use crate::tui::ui::draw_ui;

/// Event-loop heartbeat. Also the upper bound on auto-advance latency.
const TICK: Duration = Duration::from_millis(250);

/// Presentation state: everything the pages need across frames that is
/// not business state.
pub struct TuiState {
    pub all_list: QuoteListState,
    pub your_list: QuoteListState,
    /// The open add/edit form, present only on those routes.
    pub form: Option<QuoteForm>,
    pub password_prompt: Option<PasswordPromptState>,
    pub confirm_delete: Option<ConfirmDeleteState>,
    /// Column where a mouse press started, for swipe detection.
    drag_origin: Option<u16>,
    last_route: Route,
}

impl TuiState {
    fn new() -> Self {
        Self {
            all_list: QuoteListState::new(),
            your_list: QuoteListState::new(),
            form: None,
            password_prompt: None,
            confirm_delete: None,
            drag_origin: None,
            last_route: Route::Home,
        }
    }
}

/// RAII guard for raw mode + alternate screen + mouse capture, so a
/// panic or early return still restores the user's terminal.
struct TerminalModeGuard;

impl TerminalModeGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(
            io::stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen
        ) {
            error!("Failed to restore terminal screen: {e}");
        }
        if let Err(e) = disable_raw_mode() {
            error!("Failed to disable raw mode: {e}");
        }
    }
}

fn open_store() -> QuoteStore {
    let inner: Box<dyn KvStore> = match store_path() {
        Some(path) => Box::new(FileStore::open(path)),
        None => {
            warn!("Could not determine home directory, your-quotes list will not persist");
            Box::new(MemoryStore::default())
        }
    };
    QuoteStore::new(inner)
}

pub async fn run(config: ResolvedConfig) -> io::Result<()> {
    let _guard = TerminalModeGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let client = QuoteClient::new(config.api_base_url.clone());
    let width = terminal.size()?.width;
    let mut app = App::new(open_store(), config, width, Instant::now());
    let mut tui = TuiState::new();
    let (tx, rx) = mpsc::channel::<Action>();

    // Initial load for the home carousel.
    dispatch(&mut app, &mut tui, &client, &tx, Action::Refresh);

    loop {
        sync_route(&mut app, &mut tui);
        terminal.draw(|frame| draw_ui(frame, &app, &mut tui))?;

        let mut quit = false;
        if let Some(tui_event) = poll_event_timeout(poll_timeout(&app)) {
            for action in handle_event(&app, &mut tui, tui_event) {
                quit |= dispatch(&mut app, &mut tui, &client, &tx, action);
            }
        }
        while let Ok(action) = rx.try_recv() {
            quit |= dispatch(&mut app, &mut tui, &client, &tx, action);
        }
        quit |= dispatch(&mut app, &mut tui, &client, &tx, Action::Tick);

        if quit {
            return Ok(());
        }
    }
}

/// Sleep no longer than the time to the next carousel auto-advance.
fn poll_timeout(app: &App) -> Duration {
    if app.route != Route::Home {
        return TICK;
    }
    match app.carousel.deadline() {
        Some(deadline) => deadline
            .saturating_duration_since(Instant::now())
            .min(TICK),
        None => TICK,
    }
}

/// Run one action through `update()` and perform the resulting effect.
/// Returns true when the app should exit.
fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    client: &QuoteClient,
    tx: &mpsc::Sender<Action>,
    action: Action,
) -> bool {
    let effect = update(app, action, Instant::now());
    match effect {
        Effect::None => {}
        Effect::Quit => return true,
        Effect::ConfirmDelete(id) => {
            tui.password_prompt = None;
            let quote_title = app
                .detail
                .as_ref()
                .filter(|quote| quote.id == id)
                .map(|quote| quote.title.clone())
                .unwrap_or_default();
            tui.confirm_delete = Some(ConfirmDeleteState {
                quote_id: id,
                quote_title,
            });
        }
        Effect::PasswordRejected(message) => {
            if let Some(prompt) = &mut tui.password_prompt {
                prompt.reject(message);
            }
        }
        Effect::FetchQuotes => {
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = client.list_quotes().await.map_err(|e| e.to_string());
                let _ = tx.send(Action::QuotesLoaded(result));
            });
        }
        Effect::FetchQuote(id) => {
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = client.get_quote(&id).await.map_err(|e| e.to_string());
                let _ = tx.send(Action::QuoteLoaded(result));
            });
        }
        Effect::SpawnCreate(quote) => {
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = client.create_quote(&quote).await.map_err(|e| e.to_string());
                let _ = tx.send(Action::QuoteCreated(result));
            });
        }
        Effect::SpawnUpdate { id, update, token } => {
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = client
                    .update_quote(&id, &update, token.as_ref())
                    .await
                    .map_err(|e| e.to_string());
                let _ = tx.send(Action::QuoteUpdated(result));
            });
        }
        Effect::SpawnDelete { id, token } => {
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = client
                    .delete_quote(&id, token.as_ref())
                    .await
                    .map_err(|e| e.to_string());
                let _ = tx.send(Action::QuoteDeleted { id, result });
            });
        }
        Effect::SpawnVerify { id, password, intent } => {
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = client
                    .verify_password(&id, &password)
                    .await
                    .map_err(|e| e.to_string());
                let _ = tx.send(Action::PasswordVerified { id, result, intent });
            });
        }
    }
    false
}

/// Keep presentation state consistent with the current route: build the
/// form when an add/edit page opens, drop stale overlays, drop the form
/// when those pages close.
fn sync_route(app: &mut App, tui: &mut TuiState) {
    match &app.route {
        Route::AddQuote => {
            let wants_new = !matches!(
                tui.form.as_ref().map(|f| &f.mode),
                Some(FormMode::Add)
            );
            if wants_new {
                tui.form = Some(QuoteForm::add(app.config.author.as_deref()));
            }
        }
        Route::EditQuote { id } => {
            let has_form = matches!(
                tui.form.as_ref().map(|f| &f.mode),
                Some(FormMode::Edit { id: form_id }) if form_id == id
            );
            // The detail fetch may still be in flight; build the form
            // once the quote arrives.
            if !has_form {
                tui.form = app
                    .detail
                    .as_ref()
                    .filter(|quote| &quote.id == id)
                    .map(QuoteForm::edit);
            }
            tui.password_prompt = None;
        }
        _ => tui.form = None,
    }
    if app.route != tui.last_route {
        tui.drag_origin = None;
        tui.last_route = app.route.clone();
    }
}

/// Translate one input event into zero or more actions, consulting and
/// updating overlay/page state along the way.
fn handle_event(app: &App, tui: &mut TuiState, event: TuiEvent) -> Vec<Action> {
    if event == TuiEvent::ForceQuit {
        return vec![Action::Quit];
    }

    let mut actions = Vec::new();
    if app.route == Route::Home && event.is_activity() {
        actions.push(Action::Activity);
    }

    // Modal overlays swallow input while open.
    if tui.password_prompt.is_some() {
        let result = tui
            .password_prompt
            .as_mut()
            .and_then(|prompt| prompt.handle_event(&event));
        match result {
            Some(PasswordPromptEvent::Submit(password)) => {
                if let Some(prompt) = &tui.password_prompt {
                    actions.push(Action::VerifyPassword {
                        id: prompt.quote_id.clone(),
                        password,
                        intent: prompt.intent,
                    });
                }
            }
            Some(PasswordPromptEvent::Cancel) => tui.password_prompt = None,
            None => {}
        }
        return actions;
    }
    if tui.confirm_delete.is_some() {
        let result = tui
            .confirm_delete
            .as_mut()
            .and_then(|confirm| confirm.handle_event(&event));
        match result {
            Some(ConfirmDeleteEvent::Confirm) => {
                if let Some(confirm) = tui.confirm_delete.take() {
                    actions.push(Action::DeleteQuote {
                        id: confirm.quote_id,
                    });
                }
            }
            Some(ConfirmDeleteEvent::Cancel) => tui.confirm_delete = None,
            None => {}
        }
        return actions;
    }

    if let TuiEvent::Resize(columns, _) = event {
        actions.push(Action::ViewportResized(columns));
        return actions;
    }

    // Form pages own the keyboard; everything else sees global keys.
    if matches!(app.route, Route::AddQuote | Route::EditQuote { .. }) {
        if let Some(form) = &mut tui.form {
            match form.handle_event(&event) {
                Some(FormEvent::Submit(data)) => actions.push(submit_action(&form.mode, data)),
                Some(FormEvent::Cancel) => {
                    let back = match &form.mode {
                        FormMode::Add => Route::Home,
                        FormMode::Edit { id } => Route::QuoteDetail { id: id.clone() },
                    };
                    actions.push(Action::Navigate(back));
                }
                None => {}
            }
        } else if event == TuiEvent::Escape {
            actions.push(Action::Navigate(Route::Home));
        }
        return actions;
    }

    match &event {
        TuiEvent::InputChar('q') => actions.push(Action::Quit),
        TuiEvent::InputChar('1') => actions.push(Action::Navigate(Route::Home)),
        TuiEvent::InputChar('2') => actions.push(Action::Navigate(Route::AllQuotes)),
        TuiEvent::InputChar('3') => actions.push(Action::Navigate(Route::YourQuotes)),
        TuiEvent::InputChar('n') => actions.push(Action::Navigate(Route::AddQuote)),
        TuiEvent::InputChar('r') => actions.push(Action::Refresh),
        _ => match &app.route {
            Route::Home => handle_home_event(tui, &event, &mut actions),
            Route::AllQuotes => {
                if let Some(QuoteListEvent::Open(index)) = tui.all_list.handle_event(&event) {
                    if let Some(quote) = app.quotes.get(index) {
                        actions.push(Action::Navigate(Route::QuoteDetail {
                            id: quote.id.clone(),
                        }));
                    }
                } else if event == TuiEvent::Escape {
                    actions.push(Action::Navigate(Route::Home));
                }
            }
            Route::YourQuotes => {
                if let Some(QuoteListEvent::Open(index)) = tui.your_list.handle_event(&event) {
                    if let Some(quote) = app.your_quotes().get(index) {
                        actions.push(Action::Navigate(Route::QuoteDetail {
                            id: quote.id.clone(),
                        }));
                    }
                } else if event == TuiEvent::Escape {
                    actions.push(Action::Navigate(Route::Home));
                }
            }
            Route::QuoteDetail { id } => handle_detail_event(app, tui, id, &event, &mut actions),
            Route::AddQuote | Route::EditQuote { .. } => {}
        },
    }
    actions
}

fn handle_home_event(tui: &mut TuiState, event: &TuiEvent, actions: &mut Vec<Action>) {
    match event {
        TuiEvent::CursorRight | TuiEvent::InputChar('l') => actions.push(Action::CarouselNext),
        TuiEvent::CursorLeft | TuiEvent::InputChar('h') => actions.push(Action::CarouselPrev),
        TuiEvent::MouseDown(column, _) => tui.drag_origin = Some(*column),
        TuiEvent::MouseUp(column, _) => {
            if let Some(origin) = tui.drag_origin.take() {
                let delta = i32::from(*column) - i32::from(origin);
                actions.push(Action::CarouselSwipe(delta));
            }
        }
        _ => {}
    }
}

fn handle_detail_event(
    app: &App,
    tui: &mut TuiState,
    id: &str,
    event: &TuiEvent,
    actions: &mut Vec<Action>,
) {
    let Some(quote) = app.detail.as_ref().filter(|quote| quote.id == id) else {
        if *event == TuiEvent::Escape {
            actions.push(Action::Navigate(Route::AllQuotes));
        }
        return;
    };
    match event {
        TuiEvent::InputChar('e') => {
            if quote.protected && app.token_for(id).is_none() {
                tui.password_prompt =
                    Some(PasswordPromptState::new(id.to_string(), GateIntent::Edit));
            } else {
                actions.push(Action::Navigate(Route::EditQuote { id: id.to_string() }));
            }
        }
        TuiEvent::InputChar('d') => {
            if quote.protected && app.token_for(id).is_none() {
                tui.password_prompt =
                    Some(PasswordPromptState::new(id.to_string(), GateIntent::Delete));
            } else {
                tui.confirm_delete = Some(ConfirmDeleteState {
                    quote_id: id.to_string(),
                    quote_title: quote.title.clone(),
                });
            }
        }
        TuiEvent::Escape => actions.push(Action::Navigate(Route::AllQuotes)),
        _ => {}
    }
}

fn submit_action(mode: &FormMode, data: FormData) -> Action {
    match mode {
        FormMode::Add => Action::CreateQuote(NewQuote {
            title: data.title,
            content: data.content,
            author: data.author,
            tags: data.tags,
            password: data.password,
        }),
        FormMode::Edit { id } => Action::UpdateQuote {
            id: id.clone(),
            update: QuoteUpdate {
                title: data.title,
                content: data.content,
                author: data.author,
                tags: data.tags,
                new_password: data.password,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::{test_app, test_quote};

    #[test]
    fn number_keys_navigate_between_pages() {
        let app = test_app();
        let mut tui = TuiState::new();
        let actions = handle_event(&app, &mut tui, TuiEvent::InputChar('2'));
        assert!(
            actions
                .iter()
                .any(|a| matches!(a, Action::Navigate(Route::AllQuotes)))
        );
    }

    #[test]
    fn home_input_counts_as_activity() {
        let app = test_app();
        let mut tui = TuiState::new();
        let actions = handle_event(&app, &mut tui, TuiEvent::CursorRight);
        assert!(matches!(actions[0], Action::Activity));
        assert!(matches!(actions[1], Action::CarouselNext));
    }

    #[test]
    fn mouse_drag_on_home_becomes_a_swipe() {
        let app = test_app();
        let mut tui = TuiState::new();
        assert!(handle_event(&app, &mut tui, TuiEvent::MouseDown(40, 5))
            .iter()
            .all(|a| matches!(a, Action::Activity)));
        let actions = handle_event(&app, &mut tui, TuiEvent::MouseUp(10, 5));
        assert!(
            actions
                .iter()
                .any(|a| matches!(a, Action::CarouselSwipe(-30)))
        );
    }

    #[test]
    fn edit_on_a_protected_quote_opens_the_password_prompt() {
        let mut app = test_app();
        let mut quote = test_quote("p1");
        quote.protected = true;
        app.detail = Some(quote);
        app.route = Route::QuoteDetail { id: "p1".to_string() };

        let mut tui = TuiState::new();
        let actions = handle_event(&app, &mut tui, TuiEvent::InputChar('e'));
        assert!(actions.is_empty());
        assert!(tui.password_prompt.is_some());
    }

    #[test]
    fn edit_on_an_unprotected_quote_goes_straight_to_the_form() {
        let mut app = test_app();
        app.detail = Some(test_quote("p1"));
        app.route = Route::QuoteDetail { id: "p1".to_string() };

        let mut tui = TuiState::new();
        let actions = handle_event(&app, &mut tui, TuiEvent::InputChar('e'));
        assert!(matches!(
            &actions[..],
            [Action::Navigate(Route::EditQuote { id })] if id == "p1"
        ));
    }

    #[test]
    fn open_password_prompt_swallows_global_keys() {
        let mut app = test_app();
        app.route = Route::QuoteDetail { id: "p1".to_string() };
        let mut tui = TuiState::new();
        tui.password_prompt = Some(PasswordPromptState::new("p1".to_string(), GateIntent::Edit));

        let actions = handle_event(&app, &mut tui, TuiEvent::InputChar('q'));
        assert!(actions.is_empty());
        assert!(tui.password_prompt.is_some());
    }

    #[test]
    fn confirmed_delete_emits_the_delete_action() {
        let mut app = test_app();
        app.route = Route::QuoteDetail { id: "p1".to_string() };
        let mut tui = TuiState::new();
        tui.confirm_delete = Some(ConfirmDeleteState {
            quote_id: "p1".to_string(),
            quote_title: "t".to_string(),
        });

        let actions = handle_event(&app, &mut tui, TuiEvent::InputChar('y'));
        assert!(matches!(
            &actions[..],
            [Action::DeleteQuote { id }] if id == "p1"
        ));
        assert!(tui.confirm_delete.is_none());
    }

    #[test]
    fn sync_route_builds_the_edit_form_once_the_quote_arrives() {
        let mut app = test_app();
        app.route = Route::EditQuote { id: "p1".to_string() };
        let mut tui = TuiState::new();

        sync_route(&mut app, &mut tui);
        assert!(tui.form.is_none());

        app.detail = Some(test_quote("p1"));
        sync_route(&mut app, &mut tui);
        assert!(matches!(
            tui.form.as_ref().map(|f| &f.mode),
            Some(FormMode::Edit { id }) if id == "p1"
        ));
    }

    #[test]
    fn sync_route_drops_the_form_off_the_form_pages() {
        let mut app = test_app();
        app.route = Route::AddQuote;
        let mut tui = TuiState::new();
        sync_route(&mut app, &mut tui);
        assert!(tui.form.is_some());

        app.route = Route::Home;
        sync_route(&mut app, &mut tui);
        assert!(tui.form.is_none());
    }
}
