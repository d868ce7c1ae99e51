//! Quote provider trait
//!
//! Defines the interface that quotation services must implement.

use crate::data::types::Quote;
use crate::error::Result;

use super::types::Language;

/// A source of random quotations
///
/// Implementations wrap one remote quotation service. The trait is the seam
/// the front-end and tests program against.
pub trait QuoteProvider: Send + Sync {
    /// Display name for the provider (e.g., "Quotes15")
    fn name(&self) -> &'static str;

    /// Machine-readable identifier (e.g., "quotes15")
    fn id(&self) -> &'static str;

    /// Fetch one random quote in the given language
    fn fetch_random(&self, language_code: &str) -> Result<Quote>;

    /// Languages the provider can serve, in display order
    fn available_languages(&self) -> Vec<Language>;
}
