use crate::commands::{CardUpdate, CmdMessage, CmdResult};
use crate::error::{FlashError, Result};
use crate::index::{index_cards, Selector};
use crate::store::{DeckStore, StorageBackend};

use super::helpers::{card_ids, deck_id, note_save_status, require_text};

pub fn add<B: StorageBackend>(
    store: &mut DeckStore<B>,
    deck: &Selector,
    front: &str,
    back: &str,
) -> Result<CmdResult> {
    let deck_id = deck_id(store, deck)?;
    let front = require_text("Front", front)?;
    let back = require_text("Back", back)?;

    let card_id = store
        .create_card(&deck_id, front.clone(), back)
        .ok_or_else(|| FlashError::Api(format!("Deck {} not found", deck)))?;

    let mut result = CmdResult::default();
    result.affected_ids.push(card_id);
    result.add_message(CmdMessage::success(format!(
        "Card added ({}): {}",
        store.card_count(&deck_id),
        front
    )));
    note_save_status(store, &mut result);
    Ok(result)
}

pub fn list<B: StorageBackend>(store: &DeckStore<B>, deck: &Selector) -> Result<CmdResult> {
    let deck_id = deck_id(store, deck)?;
    let cards = index_cards(store.cards(&deck_id));
    let mut result = CmdResult::default().with_listed_cards(cards);
    if let Some(deck) = store.deck(&deck_id) {
        result = result.with_deck(deck.clone());
    }
    Ok(result)
}

pub fn update<B: StorageBackend>(
    store: &mut DeckStore<B>,
    deck: &Selector,
    card: &Selector,
    update: &CardUpdate,
) -> Result<CmdResult> {
    let (deck_id, card_id) = card_ids(store, deck, card)?;
    let current = store
        .card(&deck_id, &card_id)
        .ok_or_else(|| FlashError::Api(format!("Card {} not found", card)))?;

    let front = match &update.front {
        Some(front) => require_text("Front", front)?,
        None => current.front.clone(),
    };
    let back = match &update.back {
        Some(back) => require_text("Back", back)?,
        None => current.back.clone(),
    };

    let mut result = CmdResult::default();
    if store.update_card(&deck_id, &card_id, front.clone(), back) {
        result.affected_ids.push(card_id);
        result.add_message(CmdMessage::success(format!("Card updated: {}", front)));
    }
    note_save_status(store, &mut result);
    Ok(result)
}

pub fn delete<B: StorageBackend>(
    store: &mut DeckStore<B>,
    deck: &Selector,
    card: &Selector,
) -> Result<CmdResult> {
    let (deck_id, card_id) = card_ids(store, deck, card)?;
    let front = store
        .card(&deck_id, &card_id)
        .map(|c| c.front.clone())
        .unwrap_or_default();

    let mut result = CmdResult::default();
    if store.delete_card(&deck_id, &card_id) {
        result.affected_ids.push(card_id);
        result.add_message(CmdMessage::success(format!("Card deleted: {}", front)));
    }
    note_save_status(store, &mut result);
    Ok(result)
}
