use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashError, Result};
use crate::index::{resolve_card, resolve_deck, Selector};
use crate::store::{DeckStore, StorageBackend};
use uuid::Uuid;

/// Trimmed, non-empty user text.
pub fn require_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FlashError::Api(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}

pub fn deck_id<B: StorageBackend>(store: &DeckStore<B>, selector: &Selector) -> Result<Uuid> {
    resolve_deck(store.decks(), selector)
}

pub fn card_ids<B: StorageBackend>(
    store: &DeckStore<B>,
    deck: &Selector,
    card: &Selector,
) -> Result<(Uuid, Uuid)> {
    let deck_id = deck_id(store, deck)?;
    let deck = store
        .deck(&deck_id)
        .ok_or_else(|| FlashError::Api(format!("Deck {} not found", deck)))?;
    let card_id = resolve_card(deck, card)?;
    Ok((deck_id, card_id))
}

/// Tell the user when the last write did not reach the disk.
pub fn note_save_status<B: StorageBackend>(store: &DeckStore<B>, result: &mut CmdResult) {
    if !store.is_persisted() {
        result.add_message(CmdMessage::warning(format!(
            "Changes could not be saved to {} and will be lost on exit",
            store.backend().location().display()
        )));
    }
}
