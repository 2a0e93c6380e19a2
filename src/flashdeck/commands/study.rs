use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashError, Result};
use crate::index::Selector;
use crate::store::{DeckStore, StorageBackend};
use crate::study::StudySession;

use super::helpers::{deck_id, note_save_status};

pub fn start<B: StorageBackend>(
    store: &DeckStore<B>,
    deck: &Selector,
    limit: Option<usize>,
) -> Result<StudySession> {
    let id = deck_id(store, deck)?;
    StudySession::start(store, &id, limit)
        .ok_or_else(|| FlashError::Api(format!("Deck {} not found", deck)))
}

pub fn finish<B: StorageBackend>(store: &DeckStore<B>, session: &StudySession) -> CmdResult {
    let summary = session.summary();
    let mut result = CmdResult::default();

    if session.is_empty() {
        result.add_message(CmdMessage::info("This deck has no cards to study."));
    } else if summary.answered == 0 {
        result.add_message(CmdMessage::info("Session ended before any answer."));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Session finished: {}/{} correct ({:.1}%)",
            summary.correct, summary.answered, summary.success_rate
        )));
    }
    note_save_status(store, &mut result);
    result.summary = Some(summary);
    result
}
