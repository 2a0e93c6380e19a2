use super::backend::StorageBackend;
use crate::error::{FlashError, Result};
use crate::model::Deck;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// The document is kept as serialized JSON so that loads go through the
/// same serde path as the file backend. Uses `RefCell` for interior
/// mutability since the store is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    document: RefCell<Option<String>>,
    simulate_write_error: Cell<bool>,
    saves: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing raw document (possibly malformed).
    pub fn with_document(raw: impl Into<String>) -> Self {
        let backend = Self::default();
        *backend.document.borrow_mut() = Some(raw.into());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// The currently stored document, exactly as written.
    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl StorageBackend for MemBackend {
    fn load_decks(&self) -> Result<Option<Vec<Deck>>> {
        match self.document.borrow().as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save_decks(&self, decks: &[Deck]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(FlashError::Store("Simulated write error".to_string()));
        }
        let content = serde_json::to_string_pretty(decks)?;
        *self.document.borrow_mut() = Some(content);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://decks.json")
    }
}
