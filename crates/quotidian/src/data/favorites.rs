//! Favorites management
//!
//! In-memory ordered set of favorite quotes with JSON persistence.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data::storage;
use crate::data::types::Quote;
use crate::error::Result;

/// Favorites data file name
pub(crate) const FAVORITES_FILE: &str = "favorites.json";

/// Favorites file format version for migrations
const FAVORITES_VERSION: u32 = 1;

/// Favorites file structure
#[derive(Debug, Serialize, Deserialize)]
struct FavoritesFile {
    version: u32,
    favorites: Vec<Quote>,
}

/// In-memory favorites set
///
/// Keeps insertion order; entries are unique by quote id.
#[derive(Debug, Default)]
pub struct FavoritesBook {
    quotes: Vec<Quote>,
    /// Whether there are unsaved changes
    dirty: bool,
}

impl FavoritesBook {
    /// Create a new empty book
    pub fn new() -> Self {
        Self {
            quotes: Vec::new(),
            dirty: false,
        }
    }

    /// Load favorites from a specific path
    ///
    /// A missing or empty file yields an empty book. An unreadable or
    /// corrupt file is an error; the caller decides how to degrade.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut book = Self::new();

        if let Some(file) = storage::load_from::<FavoritesFile>(path)? {
            // Drop any duplicate ids a hand-edited file might carry
            for quote in file.favorites {
                if !book.contains(&quote.id) {
                    book.quotes.push(quote);
                }
            }
        }

        book.dirty = false;
        Ok(book)
    }

    /// Save to a specific path, skipping the write when nothing changed
    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        let file = FavoritesFile {
            version: FAVORITES_VERSION,
            favorites: self.quotes.clone(),
        };

        storage::save_to(path, &file)?;
        self.dirty = false;
        Ok(())
    }

    /// Add a quote; no-op when an entry with the same id already exists
    ///
    /// Returns whether the quote was actually added.
    pub fn add(&mut self, quote: Quote) -> bool {
        if self.contains(&quote.id) {
            return false;
        }
        self.quotes.push(quote);
        self.dirty = true;
        true
    }

    /// Remove a quote by id; safe no-op when absent
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.quotes.len();
        self.quotes.retain(|q| q.id != id);
        let removed = self.quotes.len() != before;
        if removed {
            self.dirty = true;
        }
        removed
    }

    /// Toggle favorite status
    ///
    /// Returns `true` when the quote is a favorite afterwards.
    pub fn toggle(&mut self, quote: Quote) -> bool {
        if self.contains(&quote.id) {
            self.remove(&quote.id);
            false
        } else {
            self.add(quote);
            true
        }
    }

    /// Whether a quote with this id is in the book
    pub fn contains(&self, id: &str) -> bool {
        self.quotes.iter().any(|q| q.id == id)
    }

    /// All favorites in insertion order
    pub fn all(&self) -> &[Quote] {
        &self.quotes
    }

    /// Drop every favorite
    pub fn clear(&mut self) {
        if !self.quotes.is_empty() {
            self.quotes.clear();
            self.dirty = true;
        }
    }

    /// Number of favorites
    pub fn count(&self) -> usize {
        self.quotes.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Check if there are unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
