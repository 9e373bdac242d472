//! # UI Components
//!
//! Widgets composed by the page renderer. Stateful pages follow the
//! persistent state + transient wrapper split: the `*State` struct lives
//! across frames (in `App` or `TuiState`) and handles events; the
//! wrapper borrows it for one render.
//!
//! - `title_bar`: header with page tabs and the status readout
//! - `quote_card`: one quote as a bordered card
//! - `carousel`: the rotating recent-quotes strip on Home
//! - `quote_list`: scrollable card list (AllQuotes, YourQuotes)
//! - `quote_detail`: full single-quote page
//! - `quote_form`: add/edit form
//! - `password_prompt`, `confirm_delete`: modal overlays

pub mod carousel;
pub mod confirm_delete;
pub mod password_prompt;
pub mod quote_card;
pub mod quote_detail;
pub mod quote_form;
pub mod quote_list;
pub mod title_bar;
