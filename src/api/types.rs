//! Wire types for the quotes service. Field names follow the service's
//! JSON (`_id`, `createdAt`, camelCase) via serde renames; the rest of
//! the crate only ever sees the Rust-side names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A quote post as returned by the service.
///
/// `protected` signals that edits and deletes require a password; the
/// password itself never travels back to clients.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Quote {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub protected: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a quote. A non-empty `password` makes the quote
/// protected; `None` leaves it open.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewQuote {
    pub title: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Payload for updating a quote. `new_password` sets or changes the
/// protection password; `None` keeps whatever is on the server.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuoteUpdate {
    pub title: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    #[serde(rename = "newPassword", skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

/// Opaque capability token issued by the verify endpoint. Holding one
/// authorizes a single edit/delete flow for a protected quote; the raw
/// password is sent exactly once, to the verify call.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EditToken {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct VerifyRequest<'a> {
    pub password: &'a str,
}

/// Split a comma-separated tag field into trimmed, non-empty tags.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_deserializes_service_json() {
        let json = r#"{
            "_id": "abc123",
            "title": "Stay hungry",
            "content": "A reminder to keep learning.",
            "author": "S. Jobs",
            "tags": ["motivation", "life"],
            "protected": true,
            "createdAt": "2025-06-01T12:30:00Z"
        }"#;
        let quote: Quote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.id, "abc123");
        assert_eq!(quote.tags, vec!["motivation", "life"]);
        assert!(quote.protected);
        assert_eq!(quote.created_at.to_rfc3339(), "2025-06-01T12:30:00+00:00");
    }

    #[test]
    fn quote_tolerates_missing_optional_fields() {
        let json = r#"{
            "_id": "x",
            "title": "t",
            "content": "c",
            "author": "a",
            "createdAt": "2025-01-01T00:00:00Z"
        }"#;
        let quote: Quote = serde_json::from_str(json).unwrap();
        assert!(quote.tags.is_empty());
        assert!(!quote.protected);
    }

    #[test]
    fn new_quote_omits_absent_password() {
        let quote = NewQuote {
            title: "t".into(),
            content: "c".into(),
            author: "a".into(),
            tags: vec!["x".into()],
            password: None,
        };
        let json = serde_json::to_value(&quote).unwrap();
        assert!(json.get("password").is_none());
    }

    #[test]
    fn update_renames_new_password() {
        let update = QuoteUpdate {
            title: "t".into(),
            content: "c".into(),
            author: "a".into(),
            tags: vec![],
            new_password: Some("hunter2".into()),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["newPassword"], "hunter2");
        assert!(json.get("new_password").is_none());
    }

    #[test]
    fn parse_tags_trims_and_drops_empties() {
        assert_eq!(
            parse_tags(" motivation , life,, wisdom "),
            vec!["motivation", "life", "wisdom"]
        );
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }
}
