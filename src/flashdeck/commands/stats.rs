use crate::commands::CmdResult;
use crate::error::{FlashError, Result};
use crate::index::{index_cards, Selector};
use crate::store::{DeckStore, StorageBackend};

use super::helpers::deck_id;

/// Deck totals plus every card, for the per-card breakdown.
pub fn run<B: StorageBackend>(store: &DeckStore<B>, deck: &Selector) -> Result<CmdResult> {
    let id = deck_id(store, deck)?;
    let stats = store
        .deck_stats(&id)
        .ok_or_else(|| FlashError::Api(format!("Deck {} not found", deck)))?;

    let mut result = CmdResult::default()
        .with_stats(stats)
        .with_listed_cards(index_cards(store.cards(&id)));
    if let Some(deck) = store.deck(&id) {
        result = result.with_deck(deck.clone());
    }
    Ok(result)
}
