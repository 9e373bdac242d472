//! HTTP client for the quotes service.
//!
//! `QuoteClient` wraps a shared `reqwest::Client` with the service base
//! URL, so tests can point it at a mock server. Every call returns an
//! explicit `Result<_, ApiError>`; nothing here touches the UI.

use std::fmt;

use log::debug;

use super::types::{EditToken, NewQuote, Quote, QuoteUpdate, VerifyRequest};

pub const DEFAULT_BASE_URL: &str = "https://quoteapp-backend-1.onrender.com";

/// Header carrying the capability token for protected edits/deletes.
pub const EDIT_TOKEN_HEADER: &str = "X-Edit-Token";

#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure (connection refused, timeout, TLS, ...).
    Http(reqwest::Error),
    /// The service answered with a non-success status.
    Status { status: u16 },
    /// The body was not the JSON we expected.
    Decode(reqwest::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http(e) => write!(f, "request failed: {e}"),
            ApiError::Status { status: 401 } => write!(f, "incorrect password"),
            ApiError::Status { status: 404 } => write!(f, "quote not found"),
            ApiError::Status { status } => write!(f, "server returned status {status}"),
            ApiError::Decode(e) => write!(f, "unexpected response body: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Clone)]
pub struct QuoteClient {
    client: reqwest::Client,
    base_url: String,
}

impl QuoteClient {
    /// `base_url` without a trailing slash, e.g. `http://localhost:8080`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    /// Fetch the whole collection. The service has no pagination; callers
    /// slice what they need (the home screen shows the ten most recent).
    pub async fn list_quotes(&self) -> Result<Vec<Quote>, ApiError> {
        debug!("GET /quotes");
        let response = self
            .client
            .get(self.url("/quotes"))
            .send()
            .await
            .map_err(ApiError::Http)?;
        Self::check(&response)?;
        response.json().await.map_err(ApiError::Decode)
    }

    pub async fn get_quote(&self, id: &str) -> Result<Quote, ApiError> {
        debug!("GET /quotes/{id}");
        let response = self
            .client
            .get(self.url(&format!("/quotes/{id}")))
            .send()
            .await
            .map_err(ApiError::Http)?;
        Self::check(&response)?;
        response.json().await.map_err(ApiError::Decode)
    }

    /// Create a quote; the returned id is what the caller records in the
    /// local "your quotes" store.
    pub async fn create_quote(&self, quote: &NewQuote) -> Result<Quote, ApiError> {
        debug!("POST /quotes (title: {})", quote.title);
        let response = self
            .client
            .post(self.url("/quotes"))
            .json(quote)
            .send()
            .await
            .map_err(ApiError::Http)?;
        Self::check(&response)?;
        response.json().await.map_err(ApiError::Decode)
    }

    pub async fn update_quote(
        &self,
        id: &str,
        update: &QuoteUpdate,
        token: Option<&EditToken>,
    ) -> Result<Quote, ApiError> {
        debug!("PUT /quotes/{id}");
        let mut request = self.client.put(self.url(&format!("/quotes/{id}"))).json(update);
        if let Some(token) = token {
            request = request.header(EDIT_TOKEN_HEADER, &token.token);
        }
        let response = request.send().await.map_err(ApiError::Http)?;
        Self::check(&response)?;
        response.json().await.map_err(ApiError::Decode)
    }

    pub async fn delete_quote(&self, id: &str, token: Option<&EditToken>) -> Result<(), ApiError> {
        debug!("DELETE /quotes/{id}");
        let mut request = self.client.delete(self.url(&format!("/quotes/{id}")));
        if let Some(token) = token {
            request = request.header(EDIT_TOKEN_HEADER, &token.token);
        }
        let response = request.send().await.map_err(ApiError::Http)?;
        Self::check(&response)?;
        Ok(())
    }

    /// Trade the password for a capability token. The secret goes over
    /// the wire exactly once, in this request body; edit/delete calls
    /// then carry only the opaque token.
    pub async fn verify_password(&self, id: &str, password: &str) -> Result<EditToken, ApiError> {
        debug!("POST /quotes/{id}/verify");
        let response = self
            .client
            .post(self.url(&format!("/quotes/{id}/verify")))
            .json(&VerifyRequest { password })
            .send()
            .await
            .map_err(ApiError::Http)?;
        Self::check(&response)?;
        response.json().await.map_err(ApiError::Decode)
    }

    fn check(response: &reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
            })
        }
    }
}
