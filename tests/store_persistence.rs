use flashdeck::store::{DeckStore, FsBackend, StorageBackend};
use std::fs;
use tempfile::TempDir;

fn open(dir: &TempDir) -> DeckStore<FsBackend> {
    DeckStore::open(FsBackend::new(dir.path()))
}

#[test]
fn state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    let deck = store.create_deck("Spanish", "Basics");
    let hola = store.create_card(&deck, "hola", "hello").unwrap();
    store.create_card(&deck, "adiós", "goodbye").unwrap();
    store.record_answer(&deck, &hola, true);
    store.record_answer(&deck, &hola, false);
    store.attach_media(&deck, &hola, "audio", "hola.mp3").unwrap();

    let reopened = open(&dir);
    assert_eq!(reopened.decks(), store.decks());

    let stats = reopened.card_stats(&deck, &hola).unwrap();
    assert_eq!(stats.correct, 1);
    assert_eq!(stats.total, 2);
    assert!(reopened.deck(&deck).unwrap().last_studied.is_some());
}

#[test]
fn missing_file_is_an_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir);
    assert!(store.decks().is_empty());
    assert!(store.is_persisted());
    assert!(!dir.path().join("decks.json").exists());
}

#[test]
fn corrupt_file_is_an_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("decks.json"), "{ not json").unwrap();

    let store = open(&dir);
    assert!(store.decks().is_empty());
}

#[test]
fn failed_write_keeps_previous_document() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    let deck = store.create_deck("Keep me", "");
    let path = store.backend().decks_file();
    let before = fs::read(&path).unwrap();

    // A directory in the staging slot makes the write fail before the rename.
    let tmp = store.backend().tmp_file();
    fs::create_dir(&tmp).unwrap();

    store.create_card(&deck, "lost", "on disk").unwrap();
    assert!(!store.is_persisted());
    assert_eq!(store.card_count(&deck), 1);
    assert_eq!(fs::read(&path).unwrap(), before);

    fs::remove_dir(&tmp).unwrap();
    store.flush().unwrap();
    assert!(store.is_persisted());
    assert!(!tmp.exists());
    assert_eq!(open(&dir).card_count(&deck), 1);
}

#[test]
fn failed_rename_removes_staged_file() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FsBackend::new(dir.path());

    // The staged document is written, then renaming it over a non-empty
    // directory fails.
    let target = backend.decks_file();
    fs::create_dir(&target).unwrap();
    fs::write(target.join("occupied"), "x").unwrap();

    let mut store = DeckStore::open(FsBackend::new(dir.path()));
    store.create_deck("Unsaved", "");
    assert!(!store.is_persisted());

    assert!(backend.save_decks(store.decks()).is_err());
    assert!(!backend.tmp_file().exists());
    assert!(target.join("occupied").is_file());
}

#[test]
fn reads_documents_with_naive_timestamps_and_missing_counts() {
    let dir = tempfile::tempdir().unwrap();
    let raw = r#"[
  {
    "id": "0b6a4c3e-7d5f-4f0e-9a61-2f4b8f1e9c11",
    "name": "Capitales",
    "description": "Géographie",
    "created_at": "2024-03-01T10:15:30.123456",
    "last_studied": null,
    "cards": [
      {
        "id": "5d0c2a9b-1e47-4b8e-8f3a-6c9d7e2b4a10",
        "front": "France",
        "back": "Paris",
        "created_at": "2024-03-01T10:16:00",
        "media": [
          { "id": "9e8d7c6b-5a49-4382-9170-6f5e4d3c2b1a", "type": "image", "path": "fr.png" }
        ]
      }
    ]
  }
]"#;
    fs::write(dir.path().join("decks.json"), raw).unwrap();

    let backend = FsBackend::new(dir.path());
    let decks = backend.load_decks().unwrap().unwrap();
    assert_eq!(decks.len(), 1);
    let card = &decks[0].cards[0];
    assert_eq!(card.correct_count, 0);
    assert_eq!(card.incorrect_count, 0);
    assert_eq!(card.media[0].media_type, "image");
    assert_eq!(decks[0].created_at.to_rfc3339(), "2024-03-01T10:15:30.123456+00:00");
}

#[test]
fn custom_file_name_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = DeckStore::open(FsBackend::new(dir.path()).with_file_name("french.json"));
    store.create_deck("Français", "");

    assert!(dir.path().join("french.json").is_file());
    assert!(!dir.path().join("decks.json").exists());
}
