//! # Core Application Logic
//!
//! This module contains QuoteVault's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Carousel (rotation)  │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    API     │      │   Store    │
//!     │  Adapter   │      │ (reqwest)  │      │ (kv file)  │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum, everything that can happen in the app
//! - [`carousel`]: The rotating-window state machine behind the home screen
//! - [`config`]: Settings with defaults → file → env → CLI resolution
//! - [`store`]: Injectable key-value persistence for local bookkeeping

pub mod action;
pub mod carousel;
pub mod config;
pub mod state;
pub mod store;

#[cfg(test)]
pub mod test_support;
