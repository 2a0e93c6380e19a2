use super::backend::StorageBackend;
use crate::error::Result;
use crate::model::{Card, CardStats, Deck, DeckStats, Media};
use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

/// The deck collection and every operation on it.
///
/// Lookups that miss return a sentinel (`None`, `false`, empty, `0`).
/// Every mutation is followed by a full flush through the backend; a failed
/// flush is logged and the in-memory state stays authoritative.
pub struct DeckStore<B: StorageBackend> {
    backend: B,
    decks: Vec<Deck>,
    persisted: bool,
}

impl<B: StorageBackend> DeckStore<B> {
    /// Load the collection from `backend`. A missing document yields an
    /// empty store, and so does an unreadable one (after a warning).
    pub fn open(backend: B) -> Self {
        let decks = load_or_empty(&backend);
        Self {
            backend,
            decks,
            persisted: true,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Discard in-memory state and read the document again.
    pub fn reload(&mut self) {
        self.decks = load_or_empty(&self.backend);
        self.persisted = true;
    }

    /// Write the whole collection through the backend.
    pub fn flush(&mut self) -> Result<()> {
        let outcome = self.backend.save_decks(&self.decks);
        self.persisted = outcome.is_ok();
        outcome
    }

    /// False once a flush has failed, until a later one succeeds.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    fn commit(&mut self) {
        if let Err(e) = self.flush() {
            log::warn!(
                "failed to save decks to {}: {}",
                self.backend.location().display(),
                e
            );
        }
    }

    fn deck_mut(&mut self, id: &Uuid) -> Option<&mut Deck> {
        self.decks.iter_mut().find(|d| d.id == *id)
    }

    // --- Decks ---

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn deck(&self, id: &Uuid) -> Option<&Deck> {
        self.decks.iter().find(|d| d.id == *id)
    }

    /// Decks whose name contains `query`, ignoring case.
    pub fn filter_decks(&self, query: &str) -> Vec<&Deck> {
        let needle = query.trim().to_lowercase();
        self.decks
            .iter()
            .filter(|d| needle.is_empty() || d.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn create_deck(&mut self, name: impl Into<String>, description: impl Into<String>) -> Uuid {
        let deck = Deck::new(name.into(), description.into());
        let id = deck.id;
        self.decks.push(deck);
        self.commit();
        id
    }

    pub fn update_deck(
        &mut self,
        id: &Uuid,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> bool {
        let Some(deck) = self.deck_mut(id) else {
            return false;
        };
        deck.name = name.into();
        deck.description = description.into();
        self.commit();
        true
    }

    pub fn delete_deck(&mut self, id: &Uuid) -> bool {
        let Some(pos) = self.decks.iter().position(|d| d.id == *id) else {
            return false;
        };
        self.decks.remove(pos);
        self.commit();
        true
    }

    // --- Cards ---

    /// Cards of a deck in stored order; empty if the deck is unknown.
    pub fn cards(&self, deck_id: &Uuid) -> &[Card] {
        self.deck(deck_id).map(|d| d.cards.as_slice()).unwrap_or(&[])
    }

    pub fn card(&self, deck_id: &Uuid, card_id: &Uuid) -> Option<&Card> {
        self.deck(deck_id)?.card(card_id)
    }

    pub fn create_card(
        &mut self,
        deck_id: &Uuid,
        front: impl Into<String>,
        back: impl Into<String>,
    ) -> Option<Uuid> {
        let deck = self.deck_mut(deck_id)?;
        let card = Card::new(front.into(), back.into());
        let id = card.id;
        deck.cards.push(card);
        self.commit();
        Some(id)
    }

    pub fn update_card(
        &mut self,
        deck_id: &Uuid,
        card_id: &Uuid,
        front: impl Into<String>,
        back: impl Into<String>,
    ) -> bool {
        let Some(card) = self.deck_mut(deck_id).and_then(|d| d.card_mut(card_id)) else {
            return false;
        };
        card.front = front.into();
        card.back = back.into();
        self.commit();
        true
    }

    pub fn delete_card(&mut self, deck_id: &Uuid, card_id: &Uuid) -> bool {
        let Some(deck) = self.deck_mut(deck_id) else {
            return false;
        };
        let Some(pos) = deck.cards.iter().position(|c| c.id == *card_id) else {
            return false;
        };
        deck.cards.remove(pos);
        self.commit();
        true
    }

    pub fn card_count(&self, deck_id: &Uuid) -> usize {
        self.deck(deck_id).map_or(0, |d| d.cards.len())
    }

    // --- Study ---

    /// All cards of the deck in a fresh random order.
    ///
    /// The result is a copy; the stored card order is left as is.
    pub fn study_cards(&self, deck_id: &Uuid) -> Vec<Card> {
        self.study_cards_with(deck_id, &mut rand::thread_rng())
    }

    pub fn study_cards_with<R: Rng + ?Sized>(&self, deck_id: &Uuid, rng: &mut R) -> Vec<Card> {
        let mut cards = self.cards(deck_id).to_vec();
        cards.shuffle(rng);
        cards
    }

    /// Count one answer for a card and mark the deck as studied now.
    pub fn record_answer(&mut self, deck_id: &Uuid, card_id: &Uuid, is_correct: bool) -> bool {
        let Some(deck) = self.deck_mut(deck_id) else {
            return false;
        };
        let Some(card) = deck.card_mut(card_id) else {
            return false;
        };
        if is_correct {
            card.correct_count = card.correct_count.saturating_add(1);
        } else {
            card.incorrect_count = card.incorrect_count.saturating_add(1);
        }
        deck.last_studied = Some(Utc::now());
        self.commit();
        true
    }

    pub fn deck_stats(&self, deck_id: &Uuid) -> Option<DeckStats> {
        self.deck(deck_id).map(Deck::stats)
    }

    pub fn card_stats(&self, deck_id: &Uuid, card_id: &Uuid) -> Option<CardStats> {
        self.card(deck_id, card_id).map(Card::stats)
    }

    // --- Media ---

    pub fn attach_media(
        &mut self,
        deck_id: &Uuid,
        card_id: &Uuid,
        media_type: impl Into<String>,
        path: impl Into<String>,
    ) -> Option<Uuid> {
        let card = self.deck_mut(deck_id)?.card_mut(card_id)?;
        let media = Media::new(media_type.into(), path.into());
        let id = media.id;
        card.media.push(media);
        self.commit();
        Some(id)
    }
}

fn load_or_empty<B: StorageBackend>(backend: &B) -> Vec<Deck> {
    match backend.load_decks() {
        Ok(Some(decks)) => decks,
        Ok(None) => Vec::new(),
        Err(e) => {
            log::warn!(
                "could not load decks from {}, starting empty: {}",
                backend.location().display(),
                e
            );
            Vec::new()
        }
    }
}
