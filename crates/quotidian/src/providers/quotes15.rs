//! Quotes15 API provider
//!
//! Implementation of `QuoteProvider` for the quotes15 quotation service
//! hosted on RapidAPI.

use tracing::debug;

use crate::config::api::{
    API_HOST_HEADER, API_KEY_HEADER, QUOTES15_BASE_URL, QUOTES15_HOST, RANDOM_QUOTE_PATH,
};
use crate::data::types::Quote;
use crate::error::{QuoteError, Result};
use crate::network::HttpClient;

use super::traits::QuoteProvider;
use super::types::{Language, Payload, WireQuote};

/// Fixed language catalog of the quotes15 service
const LANGUAGES: [Language; 11] = [
    Language { code: "en", name: "English (Angličtina)" },
    Language { code: "cs", name: "Česky" },
    Language { code: "de", name: "Deutsch (Němčina)" },
    Language { code: "es", name: "Español (Španělština)" },
    Language { code: "fr", name: "Français (Francouzština)" },
    Language { code: "it", name: "Italiano (Italština)" },
    Language { code: "hu", name: "Magyar (Maďarština)" },
    Language { code: "pl", name: "Polski (Polština)" },
    Language { code: "pt", name: "Português (Portugalština)" },
    Language { code: "ru", name: "Русский (Ruština)" },
    Language { code: "sk", name: "Slovensky" },
];

/// Quotes15 provider
///
/// Holds the RapidAPI credential explicitly; nothing here reads the
/// environment, so tests can inject fake keys and mirrors.
pub struct Quotes15Provider {
    client: HttpClient,
    base_url: String,
    api_key: Option<String>,
}

impl Quotes15Provider {
    /// Create a provider for the public service
    ///
    /// Passing `None` for the key produces a provider whose fetches fail
    /// fast with a configuration error; a missing credential disables
    /// fetching without crashing anything.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Self::with_base_url(api_key, QUOTES15_BASE_URL)
    }

    /// Create a provider with a custom base URL (for testing or proxies)
    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: base_url.into(),
            api_key,
        })
    }

    /// Whether a credential is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn random_quote_url(&self, language_code: &str) -> String {
        format!(
            "{}{}?language_code={}",
            self.base_url, RANDOM_QUOTE_PATH, language_code
        )
    }
}

impl QuoteProvider for Quotes15Provider {
    fn name(&self) -> &'static str {
        "Quotes15"
    }

    fn id(&self) -> &'static str {
        "quotes15"
    }

    fn fetch_random(&self, language_code: &str) -> Result<Quote> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| QuoteError::Config("RapidAPI key is not configured".to_string()))?;

        let url = self.random_quote_url(language_code);
        debug!(%url, "fetching random quote");

        let response = self.client.get(
            &url,
            &[(API_KEY_HEADER, api_key), (API_HOST_HEADER, QUOTES15_HOST)],
        )?;

        let status = response.status();
        if !status.is_success() {
            // Body kept out of the error; it's diagnostics, not user text
            let body = response.text().unwrap_or_default();
            debug!(status = status.as_u16(), %body, "quote service error response");
            return Err(QuoteError::Http {
                status: status.as_u16(),
            });
        }

        let wire: WireQuote = response.json()?;
        match wire.classify() {
            Payload::Quote(quote) => Ok(quote),
            Payload::ServiceMessage(text) => Err(QuoteError::NotFound(text.unwrap_or_else(
                || format!("No quote found for language '{language_code}'."),
            ))),
            Payload::Malformed => Err(QuoteError::Malformed(
                "response carries neither quote fields nor a service message".to_string(),
            )),
        }
    }

    fn available_languages(&self) -> Vec<Language> {
        LANGUAGES.to_vec()
    }
}
