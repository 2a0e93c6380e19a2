//! # Flashdeck Architecture
//!
//! Flashdeck is a flashcard library with a terminal client. Decks of
//! question/answer cards are studied in shuffled sessions, and every answer
//! is counted per card. All data lives in one JSON file that is replaced
//! atomically after every change.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments, renders output, runs the study prompt  │
//! │  - The ONLY place that knows about stdout/stdin/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) + Commands (commands/*.rs)                    │
//! │  - Resolve selectors (position, id prefix, name)            │
//! │  - Validate user text, build CmdResult + messages           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Deck Store (store/deck_store.rs)                           │
//! │  - In-memory decks, cards, answers, media                   │
//! │  - Sentinel returns for unknown ids, flush after mutation   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Backends (store/fs_backend.rs, store/mem_backend.rs)       │
//! │  - Whole-document load and atomic save                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or stderr. Problems that do
//! not fail an operation (unreadable deck file, failed save) go to the `log`
//! facade; the binary installs `env_logger`.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade used by UI clients
//! - [`commands`]: Command logic returning [`commands::CmdResult`]
//! - [`store`]: The Deck Store and its storage backends
//! - [`study`]: Study sessions and their summaries
//! - [`model`]: `Deck`, `Card`, `Media` and statistics types
//! - [`index`]: Selectors and 1-based display positions
//! - [`config`]: `config.json` settings
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
pub mod study;

#[cfg(test)]
pub(crate) mod test_utils;
