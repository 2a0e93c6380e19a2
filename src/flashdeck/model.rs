//! Core data types persisted in the deck file.
//!
//! Field names are part of the on-disk format and must not be renamed:
//! `id`, `name`, `description`, `created_at`, `last_studied`, `cards`,
//! `front`, `back`, `correct_count`, `incorrect_count`, `media`, `type`, `path`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "iso_time")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "iso_time::option")]
    pub last_studied: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new(name: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            created_at: Utc::now(),
            last_studied: None,
            cards: Vec::new(),
        }
    }

    pub fn card(&self, card_id: &Uuid) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == *card_id)
    }

    pub fn card_mut(&mut self, card_id: &Uuid) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == *card_id)
    }

    /// Aggregate answer counts over every card in the deck.
    pub fn stats(&self) -> DeckStats {
        let (correct, incorrect) = self.cards.iter().fold((0u64, 0u64), |(c, i), card| {
            (c + card.correct_count as u64, i + card.incorrect_count as u64)
        });
        DeckStats {
            total_cards: self.cards.len(),
            correct_answers: correct,
            incorrect_answers: incorrect,
            success_rate: success_rate(correct, incorrect),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,
    pub front: String,
    pub back: String,
    #[serde(with = "iso_time")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub correct_count: u32,
    #[serde(default)]
    pub incorrect_count: u32,
    #[serde(default)]
    pub media: Vec<Media>,
}

impl Card {
    pub fn new(front: String, back: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            front,
            back,
            created_at: Utc::now(),
            correct_count: 0,
            incorrect_count: 0,
            media: Vec::new(),
        }
    }

    pub fn total_answers(&self) -> u64 {
        self.correct_count as u64 + self.incorrect_count as u64
    }

    pub fn stats(&self) -> CardStats {
        let total = self.total_answers();
        CardStats {
            correct: self.correct_count as u64,
            total,
            success_rate: (total > 0)
                .then(|| success_rate(self.correct_count as u64, self.incorrect_count as u64)),
        }
    }
}

/// A reference to an external media file. Only the association is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub media_type: String,
    pub path: String,
}

impl Media {
    pub fn new(media_type: String, path: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            media_type,
            path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckStats {
    pub total_cards: usize,
    pub correct_answers: u64,
    pub incorrect_answers: u64,
    pub success_rate: f64,
}

impl DeckStats {
    pub fn total_answers(&self) -> u64 {
        self.correct_answers + self.incorrect_answers
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardStats {
    pub correct: u64,
    pub total: u64,
    /// `None` until the card has been answered at least once.
    pub success_rate: Option<f64>,
}

/// Percentage of correct answers; 0 when nothing has been answered yet.
pub fn success_rate(correct: u64, incorrect: u64) -> f64 {
    let total = correct + incorrect;
    if total == 0 {
        return 0.0;
    }
    correct as f64 / total as f64 * 100.0
}

/// ISO-8601 timestamps.
///
/// Written as RFC 3339 in UTC. On read, timestamps without an offset
/// (`2024-03-01T09:15:00.123456`) are accepted and taken as UTC.
pub(crate) mod iso_time {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(de::Error::custom)
    }

    pub fn parse(raw: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|e| format!("invalid timestamp {:?}: {}", raw, e))
    }

    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(dt) => super::serialize(dt, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => super::parse(&raw).map(Some).map_err(de::Error::custom),
                None => Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn success_rate_is_zero_without_answers() {
        assert_eq!(success_rate(0, 0), 0.0);
    }

    #[test]
    fn success_rate_three_of_four() {
        assert_eq!(success_rate(3, 1), 75.0);
    }

    #[test]
    fn card_stats_has_no_rate_until_answered() {
        let mut card = Card::new("Q".into(), "A".into());
        assert_eq!(card.stats().success_rate, None);

        card.correct_count = 1;
        card.incorrect_count = 1;
        let stats = card.stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.success_rate, Some(50.0));
    }

    #[test]
    fn deck_serializes_with_fixed_field_names() {
        let mut deck = Deck::new("Kana".into(), "Hiragana drills".into());
        let mut card = Card::new("あ".into(), "a".into());
        card.media.push(Media::new("audio".into(), "/tmp/a.mp3".into()));
        deck.cards.push(card);

        let value = serde_json::to_value(&deck).unwrap();
        let obj = value.as_object().unwrap();
        for key in ["id", "name", "description", "created_at", "last_studied", "cards"] {
            assert!(obj.contains_key(key), "missing {}", key);
        }
        assert!(obj["last_studied"].is_null());

        let card = &obj["cards"][0];
        for key in ["id", "front", "back", "created_at", "correct_count", "incorrect_count", "media"] {
            assert!(card.get(key).is_some(), "missing card field {}", key);
        }
        assert_eq!(card["media"][0]["type"], "audio");
        assert_eq!(card["media"][0]["path"], "/tmp/a.mp3");
    }

    #[test]
    fn reads_naive_timestamps_and_missing_counts() {
        let json = r#"{
            "id": "0b0c5a52-8f0e-4a8e-9a0f-6d5b1a2c3d4e",
            "name": "Legacy",
            "description": "",
            "created_at": "2024-03-01T09:15:00.123456",
            "last_studied": null,
            "cards": [{
                "id": "1c1d6b63-9a1f-4b9f-8b1a-7e6c2b3d4e5f",
                "front": "Q",
                "back": "A",
                "created_at": "2024-03-01T09:16:00"
            }]
        }"#;

        let deck: Deck = serde_json::from_str(json).unwrap();
        assert_eq!(
            deck.created_at,
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 15, 0).unwrap()
                + chrono::Duration::microseconds(123456)
        );
        assert_eq!(deck.cards[0].correct_count, 0);
        assert!(deck.cards[0].media.is_empty());
    }

    #[test]
    fn timestamps_survive_a_round_trip() {
        let mut deck = Deck::new("Round".into(), String::new());
        deck.last_studied = Some(Utc::now());
        let json = serde_json::to_string(&deck).unwrap();
        let back: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(deck, back);
    }
}
