//! Global eventhub configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{EventHubError, EventHubResult};

static DEFAULT_DATA_DIR: &str = "~/.eventhub";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_persist_catalog() -> bool {
    true
}

/// Configuration at ~/.config/eventhub/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EventHubConfig {
    /// Where stored entries live.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Also keep events and registered users between runs, not only the
    /// signed-in user and RSVPs.
    #[serde(default = "default_persist_catalog")]
    pub persist_catalog: bool,
}

impl Default for EventHubConfig {
    fn default() -> Self {
        EventHubConfig {
            data_dir: default_data_dir(),
            persist_catalog: default_persist_catalog(),
        }
    }
}

impl EventHubConfig {
    pub fn config_path() -> EventHubResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventHubError::Config("Could not determine config directory".into()))?
            .join("eventhub");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, writing a commented-out default first if there
    /// isn't one.
    pub fn load() -> EventHubResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> EventHubResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| EventHubError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventHubError::Config(e.to_string()))
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EventHubResult<()> {
        let contents = format!(
            "\
# eventhub configuration

# Where the signed-in user, RSVPs and events are stored:
# data_dir = \"{}\"

# Keep created events and registered users between runs:
# persist_catalog = true
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventHubError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventHubError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
