//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::time::Instant;

use chrono::{TimeZone, Utc};

use crate::api::Quote;
use crate::core::carousel::CarouselConfig;
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::store::{MemoryStore, QuoteStore};

/// Creates a test App with a memory-backed store. Width 100 columns puts
/// the carousel in the two-card band under default breakpoints.
pub fn test_app() -> App {
    let config = ResolvedConfig {
        api_base_url: "http://localhost:8080".to_string(),
        author: None,
        carousel: CarouselConfig::default(),
    };
    App::new(
        QuoteStore::new(Box::new(MemoryStore::default())),
        config,
        100,
        Instant::now(),
    )
}

/// A minimal quote with the given id.
pub fn test_quote(id: &str) -> Quote {
    Quote {
        id: id.to_string(),
        title: format!("Quote {id}"),
        content: "Some wise words.".to_string(),
        author: "Anon".to_string(),
        tags: vec!["wisdom".to_string()],
        protected: false,
        created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
    }
}
