//! # QuoteVault
//!
//! Terminal client for a shared quotes service. Browse recent quotes on
//! a rotating home carousel, page through the full collection, and add,
//! edit, or delete your own (password-protected) quotes.
//!
//! The crate splits three ways:
//! - [`api`]: the HTTP client and wire types
//! - [`core`]: business state, the carousel state machine, config, and
//!   the local "your quotes" store
//! - [`tui`]: terminal rendering and the event loop

pub mod api;
pub mod core;
pub mod tui;
