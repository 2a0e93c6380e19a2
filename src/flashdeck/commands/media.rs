use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashError, Result};
use crate::index::Selector;
use crate::store::{DeckStore, StorageBackend};

use super::helpers::{card_ids, note_save_status, require_text};

/// Attach a media reference to a card. The file itself is not copied or
/// checked; a missing file only produces a warning.
pub fn attach<B: StorageBackend>(
    store: &mut DeckStore<B>,
    deck: &Selector,
    card: &Selector,
    media_type: &str,
    path: &str,
) -> Result<CmdResult> {
    let (deck_id, card_id) = card_ids(store, deck, card)?;
    let media_type = require_text("Media type", media_type)?.to_lowercase();
    let path = require_text("Media path", path)?;

    let media_id = store
        .attach_media(&deck_id, &card_id, media_type.clone(), path.clone())
        .ok_or_else(|| FlashError::Api(format!("Card {} not found", card)))?;

    let mut result = CmdResult::default();
    result.affected_ids.push(media_id);
    result.add_message(CmdMessage::success(format!(
        "Attached {} {}",
        media_type, path
    )));
    if !std::path::Path::new(&path).exists() {
        result.add_message(CmdMessage::warning(format!("{} does not exist (yet)", path)));
    }
    note_save_status(store, &mut result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemBackend;

    #[test]
    fn attaches_to_selected_card() {
        let mut store = DeckStore::open(MemBackend::new());
        let deck_id = store.create_deck("Birds", "");
        store.create_card(&deck_id, "Robin", "red breast");

        let result = attach(
            &mut store,
            &Selector::Position(1),
            &Selector::Position(1),
            "Image",
            "/nonexistent/robin.png",
        )
        .unwrap();

        let media = &store.decks()[0].cards[0].media;
        assert_eq!(media.len(), 1);
        assert_eq!(media[0].media_type, "image");
        assert_eq!(result.affected_ids, vec![media[0].id]);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == crate::commands::MessageLevel::Warning));
    }
}
