use crate::error::Result;
use crate::model::Deck;
use std::path::PathBuf;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while DeckStore handles the "what" (decks, cards, statistics).
pub trait StorageBackend {
    /// Load the whole deck document.
    /// Returns Ok(None) if nothing has been stored yet.
    /// Returns Err on I/O errors or an unparseable document.
    fn load_decks(&self) -> Result<Option<Vec<Deck>>>;

    /// Replace the whole deck document.
    /// MUST be atomic (e.g. write to tmp then rename): on failure the
    /// previously stored document stays intact.
    fn save_decks(&self, decks: &[Deck]) -> Result<()>;

    /// Where the document lives. For FsBackend this is the real path,
    /// for MemBackend a virtual one.
    fn location(&self) -> PathBuf;
}
