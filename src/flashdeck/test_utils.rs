use crate::store::{DeckStore, FsBackend};
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // Keep the TempDir alive until the test is done
    pub _temp_dir: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().join("data");
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn backend(&self) -> FsBackend {
        FsBackend::new(&self.root)
    }

    pub fn open_store(&self) -> DeckStore<FsBackend> {
        DeckStore::open(self.backend())
    }
}
