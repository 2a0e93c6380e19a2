//! Study sessions: one pass over a shuffled copy of a deck's cards.

use crate::model::{success_rate, Card};
use crate::store::{DeckStore, StorageBackend};
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

pub struct StudySession {
    deck_id: Uuid,
    cards: Vec<Card>,
    position: usize,
    correct: u64,
    answered: u64,
    started_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub cards_in_session: usize,
    pub answered: u64,
    pub correct: u64,
    pub success_rate: f64,
    pub elapsed: Duration,
}

impl StudySession {
    /// Start a session over every card of the deck, at most `limit` of them.
    /// Returns `None` if the deck does not exist.
    pub fn start<B: StorageBackend>(
        store: &DeckStore<B>,
        deck_id: &Uuid,
        limit: Option<usize>,
    ) -> Option<Self> {
        store.deck(deck_id)?;
        let mut cards = store.study_cards(deck_id);
        if let Some(limit) = limit {
            cards.truncate(limit);
        }
        Some(Self::with_cards(*deck_id, cards))
    }

    pub fn with_cards(deck_id: Uuid, cards: Vec<Card>) -> Self {
        Self {
            deck_id,
            cards,
            position: 0,
            correct: 0,
            answered: 0,
            started_at: Utc::now(),
        }
    }

    pub fn deck_id(&self) -> Uuid {
        self.deck_id
    }

    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.position)
    }

    /// Zero-based position of the current card.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.cards.len()
    }

    /// Record the answer for the current card and move on.
    ///
    /// Returns false when the session is already complete or the store no
    /// longer knows the card; the session still advances in the latter case.
    pub fn answer<B: StorageBackend>(&mut self, store: &mut DeckStore<B>, is_correct: bool) -> bool {
        let Some(card) = self.cards.get(self.position) else {
            return false;
        };
        let recorded = store.record_answer(&self.deck_id, &card.id, is_correct);
        if recorded {
            self.answered += 1;
            if is_correct {
                self.correct += 1;
            }
        }
        self.position += 1;
        recorded
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            cards_in_session: self.cards.len(),
            answered: self.answered,
            correct: self.correct,
            success_rate: success_rate(self.correct, self.answered - self.correct),
            elapsed: Utc::now() - self.started_at,
        }
    }
}
