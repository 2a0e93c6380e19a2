//! # Selectors
//!
//! Users refer to decks and cards without typing full UUIDs. A selector is
//! one of:
//!
//! - a 1-based position in the listing (`3`)
//! - a full UUID or an unambiguous prefix of at least 4 hex chars (`9f2c`)
//! - for decks only, the deck name, compared case-insensitively
//!
//! A deck whose name equals the input exactly takes precedence, so a deck
//! called `2024` is reachable by name. Names shared by several decks are
//! rejected as ambiguous.
//!
//! Positions follow stored order, which is creation order, so they are stable
//! until something earlier is deleted.

use crate::error::{FlashError, Result};
use crate::model::{Card, Deck};
use std::fmt;
use uuid::Uuid;

const MIN_PREFIX_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Position(usize),
    Id(String),
    Name(String),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Position(n) => write!(f, "{}", n),
            Selector::Id(id) => write!(f, "{}", id),
            Selector::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}

impl std::str::FromStr for Selector {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty selector".to_string());
        }
        if let Ok(n) = s.parse::<usize>() {
            return Ok(Selector::Position(n));
        }
        let is_id_like = s.len() >= MIN_PREFIX_LEN
            && s.chars().all(|c| c.is_ascii_hexdigit() || c == '-');
        if is_id_like {
            return Ok(Selector::Id(s.to_ascii_lowercase()));
        }
        Ok(Selector::Name(s.to_string()))
    }
}

/// A deck paired with its 1-based listing position.
#[derive(Debug, Clone)]
pub struct DisplayDeck {
    pub index: usize,
    pub deck: Deck,
}

/// A card paired with its 1-based position inside its deck.
#[derive(Debug, Clone)]
pub struct DisplayCard {
    pub index: usize,
    pub card: Card,
}

pub fn index_decks<'a>(decks: impl IntoIterator<Item = &'a Deck>) -> Vec<DisplayDeck> {
    decks
        .into_iter()
        .enumerate()
        .map(|(i, deck)| DisplayDeck {
            index: i + 1,
            deck: deck.clone(),
        })
        .collect()
}

pub fn index_cards(cards: &[Card]) -> Vec<DisplayCard> {
    cards
        .iter()
        .enumerate()
        .map(|(i, card)| DisplayCard {
            index: i + 1,
            card: card.clone(),
        })
        .collect()
}

pub fn resolve_deck(decks: &[Deck], selector: &Selector) -> Result<Uuid> {
    // A deck named exactly like the input ("2024", "cafe") wins over a
    // position or id prefix.
    let found = match selector {
        Selector::Name(name) => by_name(decks, name)?,
        Selector::Position(n) => match by_name(decks, &n.to_string())? {
            Some(id) => Some(id),
            None => position(decks, *n),
        },
        Selector::Id(prefix) => match by_name(decks, prefix)? {
            Some(id) => Some(id),
            None => by_prefix(decks.iter().map(|d| d.id), prefix, "deck")?,
        },
    };
    found.ok_or_else(|| FlashError::Api(format!("Deck {} not found", selector)))
}

pub fn resolve_card(deck: &Deck, selector: &Selector) -> Result<Uuid> {
    let found = match selector {
        Selector::Position(n) => position(&deck.cards, *n),
        Selector::Id(prefix) => by_prefix(deck.cards.iter().map(|c| c.id), prefix, "card")?,
        Selector::Name(_) => None,
    };
    found.ok_or_else(|| {
        FlashError::Api(format!("Card {} not found in deck {}", selector, deck.name))
    })
}

trait HasId {
    fn id(&self) -> Uuid;
}

impl HasId for Deck {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl HasId for Card {
    fn id(&self) -> Uuid {
        self.id
    }
}

fn position<T: HasId>(items: &[T], n: usize) -> Option<Uuid> {
    n.checked_sub(1).and_then(|i| items.get(i)).map(HasId::id)
}

fn by_name(decks: &[Deck], name: &str) -> Result<Option<Uuid>> {
    let needle = name.to_lowercase();
    let matches: Vec<Uuid> = decks
        .iter()
        .filter(|d| d.name.to_lowercase() == needle)
        .map(|d| d.id)
        .collect();
    match matches.as_slice() {
        [] => Ok(None),
        [id] => Ok(Some(*id)),
        _ => Err(FlashError::Api(format!(
            "Name \"{}\" matches {} decks, use a position or id instead",
            name,
            matches.len()
        ))),
    }
}

fn by_prefix(ids: impl Iterator<Item = Uuid>, prefix: &str, kind: &str) -> Result<Option<Uuid>> {
    let matches: Vec<Uuid> = ids
        .filter(|id| id.to_string().starts_with(prefix))
        .collect();
    match matches.as_slice() {
        [] => Ok(None),
        [id] => Ok(Some(*id)),
        _ => Err(FlashError::Api(format!(
            "Id prefix {} matches {} {}s, use more characters",
            prefix,
            matches.len(),
            kind
        ))),
    }
}
