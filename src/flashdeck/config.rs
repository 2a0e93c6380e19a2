use crate::error::{FlashError, Result};
use crate::store::fs_backend::{is_plain_file_name, DEFAULT_DECKS_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for flashdeck, stored in <data-dir>/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlashConfig {
    /// Name of the deck document inside the data directory
    #[serde(default = "default_decks_file")]
    pub decks_file: String,

    /// Maximum number of cards per study session (all cards when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub study_limit: Option<usize>,
}

fn default_decks_file() -> String {
    DEFAULT_DECKS_FILE.to_string()
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            decks_file: default_decks_file(),
            study_limit: None,
        }
    }
}

impl FlashConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FlashError::Io)?;
        let config: FlashConfig =
            serde_json::from_str(&content).map_err(FlashError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FlashError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(FlashError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(FlashError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "decks-file" => Ok(self.decks_file.clone()),
            "study-limit" => Ok(self
                .study_limit
                .map(|n| n.to_string())
                .unwrap_or_else(|| "none".to_string())),
            other => Err(FlashError::Config(format!("Unknown config key: {}", other))),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "decks-file" => {
                let value = value.trim();
                if !is_plain_file_name(value) {
                    return Err(FlashError::Config(format!(
                        "decks-file must be a plain file name, got {:?}",
                        value
                    )));
                }
                self.decks_file = value.to_string();
            }
            "study-limit" => {
                self.study_limit = match value.trim() {
                    "" | "none" | "0" => None,
                    n => Some(n.parse().map_err(|_| {
                        FlashError::Config(format!("study-limit must be a number, got {:?}", n))
                    })?),
                };
            }
            other => return Err(FlashError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["decks-file", "study-limit"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FlashConfig::default();
        assert_eq!(config.decks_file, "decks.json");
        assert_eq!(config.study_limit, None);
    }

    #[test]
    fn test_set_study_limit() {
        let mut config = FlashConfig::default();
        config.set("study-limit", "20").unwrap();
        assert_eq!(config.study_limit, Some(20));
        assert_eq!(config.get("study-limit").unwrap(), "20");

        config.set("study-limit", "none").unwrap();
        assert_eq!(config.study_limit, None);
        assert!(config.set("study-limit", "lots").is_err());
    }

    #[test]
    fn test_decks_file_must_be_a_name() {
        let mut config = FlashConfig::default();
        assert!(config.set("decks-file", "../elsewhere.json").is_err());
        config.set("decks-file", "spanish.json").unwrap();
        assert_eq!(config.decks_file, "spanish.json");
    }

    #[test]
    fn test_unknown_key() {
        let mut config = FlashConfig::default();
        assert!(config.get("colour").is_err());
        assert!(config.set("colour", "red").is_err());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = FlashConfig::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(config, FlashConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = FlashConfig::default();
        config.set("study-limit", "15").unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = FlashConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"study_limit": 3}"#).unwrap();

        let loaded = FlashConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.decks_file, "decks.json");
        assert_eq!(loaded.study_limit, Some(3));
    }
}
