//! String key-value storage that the stores mirror their state into.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::{EventHubError, EventHubResult};

/// Key holding the signed-in user.
pub const USER_KEY: &str = "eventapp_user";
/// Key holding every RSVP.
pub const RSVPS_KEY: &str = "eventapp_rsvps";
/// Key holding the event collection (catalog persistence only).
pub const EVENTS_KEY: &str = "eventapp_events";
/// Key holding users registered after the seed list (catalog persistence only).
pub const USERS_KEY: &str = "eventapp_users";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> EventHubResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> EventHubResult<()>;
    /// Removing a key that isn't there is fine.
    fn remove(&self, key: &str) -> EventHubResult<()>;
}

/// Read and decode a JSON entry. An entry that doesn't decode is logged and
/// treated as absent.
pub(crate) fn load_entry<T: DeserializeOwned>(
    storage: &impl KeyValueStore,
    key: &str,
) -> EventHubResult<Option<T>> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!(key, error = %e, "Ignoring unreadable stored entry");
            Ok(None)
        }
    }
}

pub(crate) fn save_entry<T: Serialize + ?Sized>(
    storage: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> EventHubResult<()> {
    let raw = serde_json::to_string(value)?;
    storage.set(key, &raw)
}

/// In-memory map. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> EventHubResult<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|e| EventHubError::Storage(format!("Storage lock poisoned: {}", e)))
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> EventHubResult<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> EventHubResult<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> EventHubResult<()> {
        self.entries()?.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> EventHubResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(EventHubError::Storage(format!("Invalid storage key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> EventHubResult<Option<String>> {
        let path = self.path_for(key)?;

        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> EventHubResult<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;

        let temp = path.with_extension("json.tmp");
        std::fs::write(&temp, value)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> EventHubResult<()> {
        let path = self.path_for(key)?;

        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
