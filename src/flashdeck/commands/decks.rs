use crate::commands::{CmdMessage, CmdResult, DeckUpdate};
use crate::error::{FlashError, Result};
use crate::index::{index_cards, index_decks, Selector};
use crate::store::{DeckStore, StorageBackend};

use super::helpers::{deck_id, note_save_status, require_text};

pub fn create<B: StorageBackend>(
    store: &mut DeckStore<B>,
    name: &str,
    description: &str,
) -> Result<CmdResult> {
    let name = require_text("Deck name", name)?;
    let duplicate = store
        .decks()
        .iter()
        .any(|d| d.name.to_lowercase() == name.to_lowercase());
    let id = store.create_deck(name.clone(), description.trim());

    let mut result = CmdResult::default();
    result.affected_ids.push(id);
    result.add_message(CmdMessage::success(format!(
        "Deck created ({}): {}",
        store.decks().len(),
        name
    )));
    if duplicate {
        result.add_message(CmdMessage::warning(format!(
            "Another deck is already named {}; select these by position or id",
            name
        )));
    }
    note_save_status(store, &mut result);
    Ok(result)
}

pub fn list<B: StorageBackend>(store: &DeckStore<B>, filter: Option<&str>) -> Result<CmdResult> {
    // Positions always refer to the unfiltered listing.
    let indexed = index_decks(store.decks());
    let listed = match filter {
        Some(query) => {
            let matching: Vec<_> = store.filter_decks(query).iter().map(|d| d.id).collect();
            indexed
                .into_iter()
                .filter(|dd| matching.contains(&dd.deck.id))
                .collect()
        }
        None => indexed,
    };
    Ok(CmdResult::default().with_listed_decks(listed))
}

pub fn show<B: StorageBackend>(store: &DeckStore<B>, selector: &Selector) -> Result<CmdResult> {
    let id = deck_id(store, selector)?;
    let deck = store
        .deck(&id)
        .ok_or_else(|| FlashError::Api(format!("Deck {} not found", selector)))?;
    let stats = deck.stats();
    Ok(CmdResult::default()
        .with_listed_cards(index_cards(&deck.cards))
        .with_stats(stats)
        .with_deck(deck.clone()))
}

pub fn update<B: StorageBackend>(
    store: &mut DeckStore<B>,
    selector: &Selector,
    update: &DeckUpdate,
) -> Result<CmdResult> {
    let id = deck_id(store, selector)?;
    let current = store
        .deck(&id)
        .ok_or_else(|| FlashError::Api(format!("Deck {} not found", selector)))?;

    let name = match &update.name {
        Some(name) => require_text("Deck name", name)?,
        None => current.name.clone(),
    };
    let description = match &update.description {
        Some(description) => description.trim().to_string(),
        None => current.description.clone(),
    };

    let mut result = CmdResult::default();
    if store.update_deck(&id, name.clone(), description) {
        result.affected_ids.push(id);
        result.add_message(CmdMessage::success(format!("Deck updated: {}", name)));
    }
    note_save_status(store, &mut result);
    Ok(result)
}

pub fn delete<B: StorageBackend>(store: &mut DeckStore<B>, selector: &Selector) -> Result<CmdResult> {
    let id = deck_id(store, selector)?;
    let (name, cards) = store
        .deck(&id)
        .map(|d| (d.name.clone(), d.cards.len()))
        .unwrap_or_default();

    let mut result = CmdResult::default();
    if store.delete_deck(&id) {
        result.affected_ids.push(id);
        result.add_message(CmdMessage::success(format!(
            "Deck deleted: {} ({} cards)",
            name, cards
        )));
    }
    note_save_status(store, &mut result);
    Ok(result)
}
