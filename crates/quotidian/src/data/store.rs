//! Serialized favorites store
//!
//! Runs favorites persistence on a dedicated thread, accepting commands via
//! crossbeam channels. Every mutation of the favorites file goes through this
//! single writer, so overlapping toggles apply in send order and the
//! read-modify-write cycle can't lose updates.

use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::warn;

use crate::data::favorites::{FavoritesBook, FAVORITES_FILE};
use crate::data::storage;
use crate::data::types::Quote;
use crate::error::{QuoteError, Result};

/// Command queue depth before senders block
const COMMAND_QUEUE_DEPTH: usize = 64;

/// Commands handled by the store thread
enum StoreCommand {
    Add(Quote),
    Remove(String),
    Toggle(Quote, Sender<bool>),
    Contains(String, Sender<bool>),
    List(Sender<Vec<Quote>>),
    Clear,
    Flush(Sender<()>),
    Shutdown,
}

/// Handle to the favorites store
///
/// Usable from any thread. Reads degrade to empty/`false` when the store is
/// unavailable; writes are best effort and never surface an error to the
/// caller. Callers that want to distinguish "no favorites" from "favorites
/// file is unreadable" can check [`FavoritesStore::degraded`].
pub struct FavoritesStore {
    cmd_tx: Sender<StoreCommand>,
    degraded: bool,
    thread: Option<JoinHandle<()>>,
}

impl FavoritesStore {
    /// Open the store at the default location
    pub fn open() -> Result<Self> {
        let path = storage::data_path(FAVORITES_FILE)?;
        Self::open_at(path)
    }

    /// Open the store against a specific file (for testing and custom locations)
    pub fn open_at(path: PathBuf) -> Result<Self> {
        // Corrupt data degrades to an empty book instead of failing the
        // caller; a missing file is a normal empty start.
        let (book, degraded) = match FavoritesBook::load_from(&path) {
            Ok(book) => (book, false),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "favorites unreadable, starting empty");
                (FavoritesBook::new(), true)
            }
        };

        let (cmd_tx, cmd_rx) = bounded::<StoreCommand>(COMMAND_QUEUE_DEPTH);

        let thread = thread::Builder::new()
            .name("favorites-store".to_string())
            .spawn(move || run(book, path, cmd_rx))
            .map_err(|e| QuoteError::Storage(format!("Failed to spawn store thread: {e}")))?;

        Ok(Self {
            cmd_tx,
            degraded,
            thread: Some(thread),
        })
    }

    /// Whether the persisted data could not be read at open time
    pub fn degraded(&self) -> bool {
        self.degraded
    }

    /// Add a quote to the favorites (idempotent by id, best effort)
    pub fn add(&self, quote: Quote) {
        self.send(StoreCommand::Add(quote));
    }

    /// Remove a favorite by id (safe no-op when absent, best effort)
    pub fn remove(&self, id: impl Into<String>) {
        self.send(StoreCommand::Remove(id.into()));
    }

    /// Toggle favorite status
    ///
    /// Returns whether the quote is a favorite afterwards; degrades to
    /// `false` when the store thread is gone.
    pub fn toggle(&self, quote: Quote) -> bool {
        let (reply_tx, reply_rx) = bounded(1);
        self.send(StoreCommand::Toggle(quote, reply_tx));
        reply_rx.recv().unwrap_or(false)
    }

    /// Whether a quote id is currently a favorite; degrades to `false`
    pub fn is_favorite(&self, id: impl Into<String>) -> bool {
        let (reply_tx, reply_rx) = bounded(1);
        self.send(StoreCommand::Contains(id.into(), reply_tx));
        reply_rx.recv().unwrap_or(false)
    }

    /// All favorites in insertion order; degrades to empty
    pub fn favorites(&self) -> Vec<Quote> {
        let (reply_tx, reply_rx) = bounded(1);
        self.send(StoreCommand::List(reply_tx));
        reply_rx.recv().unwrap_or_default()
    }

    /// Remove every favorite (best effort)
    pub fn clear(&self) {
        self.send(StoreCommand::Clear);
    }

    /// Wait until every previously sent mutation has been applied
    pub fn flush(&self) {
        let (reply_tx, reply_rx) = bounded(1);
        self.send(StoreCommand::Flush(reply_tx));
        let _ = reply_rx.recv();
    }

    fn send(&self, cmd: StoreCommand) {
        if self.cmd_tx.send(cmd).is_err() {
            warn!("favorites store thread is gone, dropping command");
        }
    }
}

impl Drop for FavoritesStore {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(StoreCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Store thread body: apply commands in arrival order
fn run(mut book: FavoritesBook, path: PathBuf, cmd_rx: Receiver<StoreCommand>) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            StoreCommand::Add(quote) => {
                if book.add(quote) {
                    persist(&mut book, &path);
                }
            }
            StoreCommand::Remove(id) => {
                if book.remove(&id) {
                    persist(&mut book, &path);
                }
            }
            StoreCommand::Toggle(quote, reply) => {
                let now_favorite = book.toggle(quote);
                persist(&mut book, &path);
                let _ = reply.send(now_favorite);
            }
            StoreCommand::Contains(id, reply) => {
                let _ = reply.send(book.contains(&id));
            }
            StoreCommand::List(reply) => {
                let _ = reply.send(book.all().to_vec());
            }
            StoreCommand::Clear => {
                book.clear();
                persist(&mut book, &path);
            }
            StoreCommand::Flush(reply) => {
                let _ = reply.send(());
            }
            StoreCommand::Shutdown => break,
        }
    }
}

/// Best-effort write-back; failures are logged, not surfaced
fn persist(book: &mut FavoritesBook, path: &Path) {
    if let Err(e) = book.save_to(path) {
        warn!(path = %path.display(), error = %e, "failed to persist favorites");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::fs;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path(name: &str) -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        temp_dir().join(format!("quotidian_store_test_{}_{}.json", id, name))
    }

    fn quote(id: &str) -> Quote {
        Quote::new(id, format!("content {id}"), "Author")
    }

    #[test]
    fn test_add_then_is_favorite() {
        let path = temp_path("add_check");
        let store = FavoritesStore::open_at(path.clone()).unwrap();
        store.add(quote("1"));
        assert!(store.is_favorite("1"));

        drop(store);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        let store = FavoritesStore::open_at(temp_path("empty")).unwrap();
        assert!(store.favorites().is_empty());
        assert!(!store.degraded());
    }

    #[test]
    fn test_double_add_keeps_one_entry() {
        let path = temp_path("double_add");
        let store = FavoritesStore::open_at(path.clone()).unwrap();
        store.add(quote("1"));
        store.add(quote("1"));
        assert_eq!(store.favorites().len(), 1);

        drop(store);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_remove_absent_does_not_fail() {
        let path = temp_path("remove_absent");
        let store = FavoritesStore::open_at(path.clone()).unwrap();
        store.add(quote("1"));
        store.remove("missing");
        assert_eq!(store.favorites().len(), 1);

        drop(store);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_add_add_remove_leaves_second_in_order() {
        let path = temp_path("add_add_remove");
        let store = FavoritesStore::open_at(path.clone()).unwrap();
        store.add(quote("1"));
        store.add(quote("2"));
        store.remove("1");

        let favorites = store.favorites();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, "2");

        drop(store);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_toggle_roundtrip() {
        let path = temp_path("toggle");
        let store = FavoritesStore::open_at(path.clone()).unwrap();
        assert!(store.toggle(quote("1")));
        assert!(store.is_favorite("1"));
        assert!(!store.toggle(quote("1")));
        assert!(!store.is_favorite("1"));

        drop(store);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_clear() {
        let path = temp_path("clear");
        let store = FavoritesStore::open_at(path.clone()).unwrap();
        store.add(quote("1"));
        store.add(quote("2"));
        store.clear();
        assert!(store.favorites().is_empty());

        drop(store);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_mutations_are_durable_after_flush() {
        let path = temp_path("durable");

        {
            let store = FavoritesStore::open_at(path.clone()).unwrap();
            store.add(quote("1"));
            store.add(quote("2"));
            store.flush();
        }

        let store = FavoritesStore::open_at(path.clone()).unwrap();
        let ids: Vec<String> = store.favorites().into_iter().map(|q| q.id).collect();
        assert_eq!(ids, vec!["1", "2"]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty() {
        let path = temp_path("corrupt");
        fs::write(&path, "{ definitely not json").unwrap();

        let store = FavoritesStore::open_at(path.clone()).unwrap();
        assert!(store.degraded());
        assert!(store.favorites().is_empty());
        assert!(!store.is_favorite("anything"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_concurrent_adds_lose_nothing() {
        let path = temp_path("concurrent");
        let store = Arc::new(FavoritesStore::open_at(path.clone()).unwrap());

        let mut handles = Vec::new();
        for t in 0..4 {
            let store = store.clone();
            handles.push(thread::spawn(move || {
                for i in 0..25 {
                    store.add(quote(&format!("{t}-{i}")));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        store.flush();

        assert_eq!(store.favorites().len(), 100);

        drop(store);
        let reopened = FavoritesStore::open_at(path.clone()).unwrap();
        assert_eq!(reopened.favorites().len(), 100);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_interleaved_toggle_from_threads() {
        let path = temp_path("interleaved");
        let store = Arc::new(FavoritesStore::open_at(path.clone()).unwrap());

        // Different ids from different threads; the serialized writer must
        // keep every final add and drop every toggled-off pair.
        let mut handles = Vec::new();
        for t in 0..4 {
            let store = store.clone();
            handles.push(thread::spawn(move || {
                let id = format!("pair-{t}");
                store.toggle(quote(&id));
                store.toggle(quote(&id));
                store.add(quote(&format!("final-{t}")));
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        store.flush();

        let favorites = store.favorites();
        assert_eq!(favorites.len(), 4);
        assert!(favorites.iter().all(|q| q.id.starts_with("final-")));

        let _ = fs::remove_file(&path);
    }
}
