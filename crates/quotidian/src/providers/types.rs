//! Provider-facing types
//!
//! The language catalog entry plus the raw serde shapes for remote payloads
//! and the tagged classification applied before any field is trusted.

use serde::Deserialize;

use crate::data::types::{timestamp_id, Quote, UNKNOWN_AUTHOR};

// =============================================================================
// Language
// =============================================================================

/// A selectable quotation language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// Short language tag ("en", "cs", ...)
    pub code: &'static str,
    /// Display label
    pub name: &'static str,
}

// =============================================================================
// Wire shapes (serde)
// =============================================================================

/// Loose wire shape of the quotes15 random-quote response
///
/// Every field is optional; [`WireQuote::classify`] decides what the payload
/// actually is before anything downstream touches a field.
#[derive(Debug, Deserialize)]
pub(crate) struct WireQuote {
    /// Remote id, number or string
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub originator: Option<WireOriginator>,
    /// The service's soft-failure convention: a list of message entries
    #[serde(default)]
    pub message: Option<Vec<WireMessage>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireOriginator {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireMessage {
    #[serde(default)]
    pub msg: Option<String>,
}

/// Result of classifying a 2xx payload
#[derive(Debug)]
pub(crate) enum Payload {
    /// A well-formed quote
    Quote(Quote),
    /// Soft failure; carries the first message text when the service sent one
    ServiceMessage(Option<String>),
    /// Neither a quote nor a recognized service message
    Malformed,
}

impl WireQuote {
    /// Classify the payload into a tagged shape
    ///
    /// A non-empty `message` list wins over any quote fields. A quote needs
    /// non-blank `content` and an `originator` with a string `name`; a blank
    /// name degrades to the unknown-author sentinel.
    pub(crate) fn classify(self) -> Payload {
        if let Some(messages) = &self.message {
            if !messages.is_empty() {
                let text = messages[0]
                    .msg
                    .as_deref()
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .map(String::from);
                return Payload::ServiceMessage(text);
            }
        }

        let content = match self.content {
            Some(c) if !c.trim().is_empty() => c,
            _ => return Payload::Malformed,
        };

        let name = match self.originator.and_then(|o| o.name) {
            Some(n) => n,
            None => return Payload::Malformed,
        };
        let author = if name.trim().is_empty() {
            UNKNOWN_AUTHOR.to_string()
        } else {
            name
        };

        Payload::Quote(Quote {
            id: coerce_id(self.id),
            content,
            author,
        })
    }
}

/// Coerce the remote id into a stable string id
///
/// Numbers become decimal strings, non-empty strings pass through, anything
/// else gets a fresh timestamp-derived id.
fn coerce_id(id: Option<serde_json::Value>) -> String {
    match id {
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::String(s)) if !s.is_empty() => s,
        _ => timestamp_id(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> WireQuote {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_valid_quote_with_numeric_id() {
        let wire = parse(r#"{ "content": "X", "originator": { "name": "Y" }, "id": 42 }"#);
        match wire.classify() {
            Payload::Quote(quote) => {
                assert_eq!(quote.id, "42");
                assert_eq!(quote.content, "X");
                assert_eq!(quote.author, "Y");
            }
            other => panic!("expected quote, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_quote_with_string_id() {
        let wire = parse(r#"{ "content": "X", "originator": { "name": "Y" }, "id": "abc" }"#);
        match wire.classify() {
            Payload::Quote(quote) => assert_eq!(quote.id, "abc"),
            other => panic!("expected quote, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_id_gets_timestamp() {
        let wire = parse(r#"{ "content": "X", "originator": { "name": "Y" } }"#);
        match wire.classify() {
            Payload::Quote(quote) => {
                assert!(!quote.id.is_empty());
                assert!(quote.id.chars().all(|c| c.is_ascii_digit()));
            }
            other => panic!("expected quote, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_string_id_gets_timestamp() {
        let wire = parse(r#"{ "content": "X", "originator": { "name": "Y" }, "id": "" }"#);
        match wire.classify() {
            Payload::Quote(quote) => assert!(quote.id.chars().all(|c| c.is_ascii_digit())),
            other => panic!("expected quote, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_id_is_kept() {
        let wire = parse(r#"{ "content": "X", "originator": { "name": "Y" }, "id": 0 }"#);
        match wire.classify() {
            Payload::Quote(quote) => assert_eq!(quote.id, "0"),
            other => panic!("expected quote, got {other:?}"),
        }
    }

    #[test]
    fn test_message_list_is_soft_failure() {
        let wire = parse(r#"{ "message": [{ "msg": "not found" }] }"#);
        match wire.classify() {
            Payload::ServiceMessage(text) => assert_eq!(text.as_deref(), Some("not found")),
            other => panic!("expected service message, got {other:?}"),
        }
    }

    #[test]
    fn test_message_without_text() {
        let wire = parse(r#"{ "message": [{}] }"#);
        match wire.classify() {
            Payload::ServiceMessage(text) => assert_eq!(text, None),
            other => panic!("expected service message, got {other:?}"),
        }
    }

    #[test]
    fn test_message_wins_over_quote_fields() {
        let wire = parse(
            r#"{ "message": [{ "msg": "quota exceeded" }],
                 "content": "X", "originator": { "name": "Y" } }"#,
        );
        assert!(matches!(wire.classify(), Payload::ServiceMessage(_)));
    }

    #[test]
    fn test_empty_message_list_falls_through() {
        let wire = parse(r#"{ "message": [], "content": "X", "originator": { "name": "Y" } }"#);
        assert!(matches!(wire.classify(), Payload::Quote(_)));
    }

    #[test]
    fn test_missing_originator_is_malformed() {
        let wire = parse(r#"{ "content": "X" }"#);
        assert!(matches!(wire.classify(), Payload::Malformed));
    }

    #[test]
    fn test_originator_without_name_is_malformed() {
        let wire = parse(r#"{ "content": "X", "originator": {} }"#);
        assert!(matches!(wire.classify(), Payload::Malformed));
    }

    #[test]
    fn test_blank_content_is_malformed() {
        let wire = parse(r#"{ "content": "   ", "originator": { "name": "Y" } }"#);
        assert!(matches!(wire.classify(), Payload::Malformed));
    }

    #[test]
    fn test_missing_content_is_malformed() {
        let wire = parse(r#"{ "originator": { "name": "Y" } }"#);
        assert!(matches!(wire.classify(), Payload::Malformed));
    }

    #[test]
    fn test_empty_object_is_malformed() {
        let wire = parse("{}");
        assert!(matches!(wire.classify(), Payload::Malformed));
    }

    #[test]
    fn test_blank_author_degrades_to_unknown() {
        let wire = parse(r#"{ "content": "X", "originator": { "name": "  " } }"#);
        match wire.classify() {
            Payload::Quote(quote) => assert_eq!(quote.author, UNKNOWN_AUTHOR),
            other => panic!("expected quote, got {other:?}"),
        }
    }

    #[test]
    fn test_extra_fields_ignored() {
        let wire = parse(
            r#"{ "content": "X", "originator": { "name": "Y", "url": "http://x" },
                 "id": 7, "tags": ["life"], "url": "http://quote" }"#,
        );
        assert!(matches!(wire.classify(), Payload::Quote(_)));
    }
}
