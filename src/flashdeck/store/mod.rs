//! # Storage Layer
//!
//! All decks live in one JSON document that is rewritten wholesale after
//! every mutation.
//!
//! ## Split of Responsibilities
//!
//! - [`backend::StorageBackend`]: raw I/O of the whole document (load, atomic save).
//! - [`deck_store::DeckStore`]: the in-memory collection and every operation on
//!   decks, cards, answers and media. It owns a backend and flushes through it.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production. The document is staged in
//!   `decks.json.tmp`, synced, then renamed over `decks.json`, so a failed
//!   write never truncates the previous file.
//! - [`mem_backend::MemBackend`]: for tests. Keeps the serialized document in
//!   memory and can simulate write failures.
//!
//! ## Failure Handling
//!
//! - Unknown deck or card ids are not errors: operations return `None`,
//!   `false`, an empty slice or `0`.
//! - A document that cannot be read or parsed is treated as "no data".
//! - A failed flush is logged; the mutation stays in memory and
//!   [`DeckStore::is_persisted`] reports `false` until a later flush succeeds.
//!
//! ## Storage Layout
//!
//! ```text
//! <data-dir>/
//! ├── decks.json      # All decks, cards and media references
//! └── config.json     # Optional settings
//! ```

pub mod backend;
pub mod deck_store;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use deck_store::DeckStore;
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;
