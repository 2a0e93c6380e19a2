use super::backend::StorageBackend;
use crate::error::{FlashError, Result};
use crate::model::Deck;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_DECKS_FILE: &str = "decks.json";

/// A single path component: no separators, not `.` or `..`.
pub fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\']) && name != "." && name != ".."
}

pub struct FsBackend {
    data_dir: PathBuf,
    file_name: String,
}

impl FsBackend {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            file_name: DEFAULT_DECKS_FILE.to_string(),
        }
    }

    /// Use `name` instead of `decks.json`. Blank names keep the default, and
    /// so does anything that is not a plain file name (the document never
    /// leaves the data directory).
    pub fn with_file_name(mut self, name: &str) -> Self {
        let name = name.trim();
        if is_plain_file_name(name) {
            self.file_name = name.to_string();
        } else if !name.is_empty() {
            log::warn!(
                "ignoring decks file {:?}: not a plain file name, using {}",
                name,
                DEFAULT_DECKS_FILE
            );
        }
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn decks_file(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }

    /// The temporary sibling the document is staged in before the rename.
    pub fn tmp_file(&self) -> PathBuf {
        self.data_dir.join(format!("{}.tmp", self.file_name))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(FlashError::Io)?;
        }
        Ok(())
    }

    fn write_staged(&self, tmp: &Path, content: &str) -> Result<()> {
        let mut file = File::create(tmp).map_err(FlashError::Io)?;
        file.write_all(content.as_bytes()).map_err(FlashError::Io)?;
        file.sync_all().map_err(FlashError::Io)?;
        fs::rename(tmp, self.decks_file()).map_err(FlashError::Io)?;
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_decks(&self) -> Result<Option<Vec<Deck>>> {
        let path = self.decks_file();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(FlashError::Io)?;
        let decks: Vec<Deck> = serde_json::from_str(&content).map_err(FlashError::Serialization)?;
        log::debug!("loaded {} decks from {}", decks.len(), path.display());
        Ok(Some(decks))
    }

    fn save_decks(&self, decks: &[Deck]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(decks).map_err(FlashError::Serialization)?;

        let tmp = self.tmp_file();
        if let Err(e) = self.write_staged(&tmp, &content) {
            if tmp.is_file() {
                let _ = fs::remove_file(&tmp);
            }
            return Err(e);
        }
        log::debug!("wrote {} decks to {}", decks.len(), self.decks_file().display());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.decks_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestEnv;

    #[test]
    fn missing_file_loads_as_none_without_creating_anything() {
        let env = TestEnv::new();
        assert!(env.backend().load_decks().unwrap().is_none());
        assert!(!env.root.exists());
    }

    #[test]
    fn save_creates_data_dir_and_leaves_no_tmp() {
        let env = TestEnv::new();
        let backend = env.backend();
        backend.save_decks(&[Deck::new("D".into(), String::new())]).unwrap();

        assert!(backend.decks_file().is_file());
        assert!(!backend.tmp_file().exists());
        assert_eq!(backend.load_decks().unwrap().unwrap().len(), 1);
    }

    #[test]
    fn written_document_is_indented_utf8() {
        let env = TestEnv::new();
        let mut store = env.open_store();
        store.create_deck("Français", "déjà vu");

        let raw = fs::read_to_string(env.backend().decks_file()).unwrap();
        assert!(raw.starts_with("[\n  {"));
        assert!(raw.contains("\"name\": \"Français\""));
    }

    #[test]
    fn custom_file_name() {
        let env = TestEnv::new();
        let backend = env.backend().with_file_name("spanish.json");
        backend.save_decks(&[]).unwrap();
        assert!(env.root.join("spanish.json").is_file());
        assert_eq!(backend.tmp_file(), env.root.join("spanish.json.tmp"));

        let blank = env.backend().with_file_name("  ");
        assert_eq!(blank.decks_file(), env.root.join(DEFAULT_DECKS_FILE));
    }

    #[test]
    fn file_name_cannot_leave_data_dir() {
        let env = TestEnv::new();
        for name in ["../outside.json", "sub/decks.json", "..\\x.json", "..", "."] {
            let backend = env.backend().with_file_name(name);
            assert_eq!(backend.decks_file(), env.root.join(DEFAULT_DECKS_FILE), "{}", name);
        }
        assert!(is_plain_file_name("spanish.json"));
        assert!(!is_plain_file_name("../x.json"));
    }
}
