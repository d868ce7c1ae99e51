//! Error types for quotidian
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for quotidian
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{}", friendly_network_error(.0))]
    Network(#[from] reqwest::Error),

    #[error("Quote service returned HTTP {status}")]
    Http { status: u16 },

    /// Soft failure from the service; Display is exactly the remote message
    #[error("{0}")]
    NotFound(String),

    #[error("Quote service returned data in an unexpected format: {0}")]
    Malformed(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for quotidian
pub type Result<T> = std::result::Result<T, QuoteError>;

fn friendly_network_error(e: &reqwest::Error) -> String {
    if e.is_builder() {
        if let Some(url) = e.url() {
            return format!("Invalid URL: {url}");
        }
        return "Invalid URL".to_string();
    }
    if e.is_connect() {
        if let Some(url) = e.url() {
            return format!("Could not connect to {}", url.host_str().unwrap_or("server"));
        }
        return "Could not connect to server".to_string();
    }
    if e.is_timeout() {
        return "Connection timed out".to_string();
    }
    if e.is_decode() {
        return "Invalid response from server".to_string();
    }
    format!("Network error: {e}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_is_bare_message() {
        let err = QuoteError::NotFound("not found".to_string());
        assert_eq!(err.to_string(), "not found");
    }

    #[test]
    fn test_http_display_embeds_status() {
        let err = QuoteError::Http { status: 503 };
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_config_display() {
        let err = QuoteError::Config("no key".to_string());
        assert!(err.to_string().contains("no key"));
    }
}
