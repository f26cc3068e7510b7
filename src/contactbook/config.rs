use crate::error::{ContactsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "data/contacts.dat";
const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Configuration for contactbook, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// Path of the contacts file. Relative paths resolve against the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Prompt shown before each command
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            prompt: default_prompt(),
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ContactsError::Io)?;
        let config: BookConfig = serde_json::from_str(&content).map_err(ContactsError::Config)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ContactsError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ContactsError::Config)?;
        fs::write(config_path, content).map_err(ContactsError::Io)?;
        Ok(())
    }

    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }
}
