use crate::config::FlashConfig;
use crate::index::{DisplayCard, DisplayDeck};
use crate::model::{Deck, DeckStats};
use crate::study::SessionSummary;
use std::path::PathBuf;
use uuid::Uuid;

pub mod cards;
pub mod config;
pub mod decks;
pub mod helpers;
pub mod media;
pub mod stats;
pub mod study;

#[derive(Debug, Clone)]
pub struct FlashPaths {
    pub data_dir: PathBuf,
}

impl FlashPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Ids created or touched by the command
    pub affected_ids: Vec<Uuid>,
    pub listed_decks: Vec<DisplayDeck>,
    pub listed_cards: Vec<DisplayCard>,
    /// The deck a per-deck command operated on
    pub deck: Option<Deck>,
    pub stats: Option<DeckStats>,
    pub summary: Option<SessionSummary>,
    pub config: Option<FlashConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_decks(mut self, decks: Vec<DisplayDeck>) -> Self {
        self.listed_decks = decks;
        self
    }

    pub fn with_listed_cards(mut self, cards: Vec<DisplayCard>) -> Self {
        self.listed_cards = cards;
        self
    }

    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn with_stats(mut self, stats: DeckStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: FlashConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Partial update: fields left as `None` keep their current value.
#[derive(Debug, Clone, Default)]
pub struct DeckUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CardUpdate {
    pub front: Option<String>,
    pub back: Option<String>,
}
