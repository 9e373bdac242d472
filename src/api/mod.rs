//! HTTP layer for the remote quotes service. The rest of the crate goes
//! through [`QuoteClient`]; only this module knows about reqwest.

pub mod client;
pub mod types;

pub use client::{ApiError, QuoteClient, DEFAULT_BASE_URL, EDIT_TOKEN_HEADER};
pub use types::{EditToken, NewQuote, Quote, QuoteUpdate, parse_tags};
