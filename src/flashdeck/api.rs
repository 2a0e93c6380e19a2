//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for UI clients (the bundled CLI, or anything else).
//!
//! It parses user selectors, dispatches to `commands/*.rs` and returns
//! structured [`CmdResult`] values. It never prints and holds no business
//! logic of its own.
//!
//! `FlashApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `FlashApi<FsBackend>`
//! - Testing: `FlashApi<MemBackend>`

use crate::commands;
use crate::config::FlashConfig;
use crate::error::{FlashError, Result};
use crate::index::Selector;
use crate::store::{DeckStore, FsBackend, StorageBackend};
use crate::study::StudySession;

pub struct FlashApi<B: StorageBackend> {
    store: DeckStore<B>,
    paths: commands::FlashPaths,
    config: FlashConfig,
}

impl FlashApi<FsBackend> {
    /// Open the deck file in `paths.data_dir`, honoring `config.json`.
    pub fn open(paths: commands::FlashPaths) -> Self {
        let config = FlashConfig::load(&paths.data_dir).unwrap_or_else(|e| {
            log::warn!("ignoring unreadable config in {}: {}", paths.data_dir.display(), e);
            FlashConfig::default()
        });
        let backend = FsBackend::new(&paths.data_dir).with_file_name(&config.decks_file);
        Self::new(DeckStore::open(backend), paths, config)
    }
}

impl<B: StorageBackend> FlashApi<B> {
    pub fn new(store: DeckStore<B>, paths: commands::FlashPaths, config: FlashConfig) -> Self {
        Self {
            store,
            paths,
            config,
        }
    }

    pub fn store(&self) -> &DeckStore<B> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DeckStore<B> {
        &mut self.store
    }

    pub fn paths(&self) -> &commands::FlashPaths {
        &self.paths
    }

    pub fn config(&self) -> &FlashConfig {
        &self.config
    }

    // --- Decks ---

    pub fn create_deck(&mut self, name: &str, description: &str) -> Result<commands::CmdResult> {
        commands::decks::create(&mut self.store, name, description)
    }

    pub fn list_decks(&self, filter: Option<&str>) -> Result<commands::CmdResult> {
        commands::decks::list(&self.store, filter)
    }

    pub fn show_deck(&self, deck: &str) -> Result<commands::CmdResult> {
        commands::decks::show(&self.store, &parse_selector(deck)?)
    }

    pub fn update_deck(
        &mut self,
        deck: &str,
        update: &commands::DeckUpdate,
    ) -> Result<commands::CmdResult> {
        commands::decks::update(&mut self.store, &parse_selector(deck)?, update)
    }

    pub fn delete_deck(&mut self, deck: &str) -> Result<commands::CmdResult> {
        commands::decks::delete(&mut self.store, &parse_selector(deck)?)
    }

    // --- Cards ---

    pub fn add_card(&mut self, deck: &str, front: &str, back: &str) -> Result<commands::CmdResult> {
        commands::cards::add(&mut self.store, &parse_selector(deck)?, front, back)
    }

    pub fn list_cards(&self, deck: &str) -> Result<commands::CmdResult> {
        commands::cards::list(&self.store, &parse_selector(deck)?)
    }

    pub fn update_card(
        &mut self,
        deck: &str,
        card: &str,
        update: &commands::CardUpdate,
    ) -> Result<commands::CmdResult> {
        commands::cards::update(
            &mut self.store,
            &parse_selector(deck)?,
            &parse_selector(card)?,
            update,
        )
    }

    pub fn delete_card(&mut self, deck: &str, card: &str) -> Result<commands::CmdResult> {
        commands::cards::delete(&mut self.store, &parse_selector(deck)?, &parse_selector(card)?)
    }

    pub fn attach_media(
        &mut self,
        deck: &str,
        card: &str,
        media_type: &str,
        path: &str,
    ) -> Result<commands::CmdResult> {
        commands::media::attach(
            &mut self.store,
            &parse_selector(deck)?,
            &parse_selector(card)?,
            media_type,
            path,
        )
    }

    // --- Study & stats ---

    pub fn deck_stats(&self, deck: &str) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store, &parse_selector(deck)?)
    }

    /// Start a session limited by the configured `study_limit`.
    pub fn start_study(&self, deck: &str) -> Result<StudySession> {
        commands::study::start(&self.store, &parse_selector(deck)?, self.config.study_limit)
    }

    /// Record the answer for the session's current card.
    pub fn answer(&mut self, session: &mut StudySession, is_correct: bool) -> bool {
        session.answer(&mut self.store, is_correct)
    }

    pub fn finish_study(&self, session: &StudySession) -> commands::CmdResult {
        commands::study::finish(&self.store, session)
    }

    pub fn config_action(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }
}

fn parse_selector(input: &str) -> Result<Selector> {
    input
        .parse()
        .map_err(|e| FlashError::Api(format!("Invalid selector {:?}: {}", input, e)))
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CardUpdate, CmdMessage, CmdResult, DeckUpdate, FlashPaths, MessageLevel};
