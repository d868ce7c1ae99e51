//! Common data types for persistence
//!
//! Shared types used across the data module.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Author label used when the remote source carries a blank attribution
pub const UNKNOWN_AUTHOR: &str = "Neznámý autor";

/// Generate a fresh identifier from the current wall clock
///
/// Used when the remote source omits an id. Millisecond resolution keeps
/// collisions unlikely within one session.
pub fn timestamp_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    millis.to_string()
}

/// A single quotation with its attribution
///
/// Identity for favorites purposes is the `id` alone; two quotes with the
/// same id are the same entry regardless of text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    /// Stable identifier (remote id coerced to string, or timestamp-derived)
    pub id: String,
    /// Quotation text
    pub content: String,
    /// Attributed author; `UNKNOWN_AUTHOR` when the source left it blank
    pub author: String,
}

impl Quote {
    /// Create a new quote
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            author: author.into(),
        }
    }

    /// Whether the author is a real attribution rather than the placeholder
    pub fn has_known_author(&self) -> bool {
        !self.author.trim().is_empty() && self.author != UNKNOWN_AUTHOR
    }

    /// External reference link for the author (Czech mobile Wikipedia),
    /// spaces mapped to underscores, article name percent-encoded
    ///
    /// `None` when the author is unknown.
    pub fn author_wiki_url(&self) -> Option<String> {
        if !self.has_known_author() {
            return None;
        }
        let article = self.author.trim().replace(' ', "_");
        Some(format!(
            "https://cs.m.wikipedia.org/wiki/{}",
            urlencoding::encode(&article)
        ))
    }
}
