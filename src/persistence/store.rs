use super::files::{atomic_write, read_file};
use crate::domain::DashboardState;
use crate::error::StoreError;
#[cfg(test)]
use std::collections::HashMap;
use std::path::PathBuf;

/// Storage key the dashboard state is kept under
pub const DEFAULT_STORAGE_KEY: &str = "davids-dashboard";

/// String store keyed by name. Each `set` replaces the whole value.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Stores each key as `<key>.json` in a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        read_file(self.path_for(key)).map_err(|source| StoreError::Unavailable {
            key: key.to_string(),
            source,
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        atomic_write(self.path_for(key), value).map_err(|source| StoreError::Unavailable {
            key: key.to_string(),
            source,
        })
    }
}

/// In-process store, nothing survives the process
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Loads and saves the dashboard state through a key-value store
pub struct ProgressStore<S: KeyValueStore> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> ProgressStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Read the stored state, reporting why it could not be used
    pub fn try_load(&self) -> Result<Option<DashboardState>, StoreError> {
        let Some(content) = self.backend.get(&self.key)? else {
            return Ok(None);
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StoreError::Malformed {
                key: self.key.clone(),
                source,
            })
    }

    /// Read the stored state; absent, unreadable or malformed data yields an empty state
    pub fn load(&self) -> DashboardState {
        match self.try_load() {
            Ok(Some(state)) => {
                tracing::debug!(
                    key = %self.key,
                    checked = state.checked.len(),
                    history = state.history.len(),
                    "loaded dashboard state"
                );
                state
            }
            Ok(None) => {
                tracing::info!(key = %self.key, "no stored dashboard state, starting fresh");
                DashboardState::default()
            }
            Err(e) => {
                tracing::warn!(error = ?e, "discarding stored dashboard state");
                DashboardState::default()
            }
        }
    }

    /// Overwrite the stored state with `state`
    pub fn save(&mut self, state: &DashboardState) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(state).map_err(|source| StoreError::Malformed {
            key: self.key.clone(),
            source,
        })?;
        self.backend.set(&self.key, &json)?;
        tracing::debug!(key = %self.key, "saved dashboard state");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TaskKey, WeekSummary, Weekday};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    /// Backend whose every access fails, like a disk that went away
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
            self.get(key).map(|_| ())
        }
    }

    fn sample_state() -> DashboardState {
        let mut state = DashboardState::default();
        state.toggle(TaskKey::new(Weekday::Mon, 0));
        state.toggle(TaskKey::new(Weekday::Wed, 1));
        state.history.push(WeekSummary {
            archived_at: NaiveDate::from_ymd_opt(2026, 10, 9).unwrap(),
            completion_percent: 62,
            applications: 11,
            networking_contacts: 2,
            interviews: 0,
        });
        state
    }

    #[test]
    fn test_load_absent_is_default() {
        let store = ProgressStore::new(MemoryStore::default(), DEFAULT_STORAGE_KEY);
        assert_eq!(store.load(), DashboardState::default());
        assert!(store.try_load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut store = ProgressStore::new(MemoryStore::default(), DEFAULT_STORAGE_KEY);
        let state = sample_state();

        store.save(&state).unwrap();
        assert_eq!(store.load(), state);
    }

    #[test]
    fn test_malformed_payloads_fall_back_to_default() {
        let payloads = [
            "not json",
            "{\"checked\": {}}",
            "{\"checked\": {\"Mon0\": true}, \"history\": []}",
            "{\"checked\": {}, \"history\": [{\"date\": \"10/12\", \"progress\": 50}]}",
            "[1, 2, 3]",
            "",
        ];

        for payload in payloads {
            let mut backend = MemoryStore::default();
            backend.set(DEFAULT_STORAGE_KEY, payload).unwrap();
            let store = ProgressStore::new(backend, DEFAULT_STORAGE_KEY);

            assert!(matches!(
                store.try_load(),
                Err(StoreError::Malformed { .. })
            ));
            assert_eq!(store.load(), DashboardState::default());
        }
    }

    #[test]
    fn test_unavailable_backend_degrades() {
        let mut store = ProgressStore::new(BrokenStore, DEFAULT_STORAGE_KEY);

        assert_eq!(store.load(), DashboardState::default());
        assert!(matches!(
            store.save(&sample_state()),
            Err(StoreError::Unavailable { .. })
        ));
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = tempdir().unwrap();
        let mut store = ProgressStore::new(FileStore::new(temp_dir.path()), DEFAULT_STORAGE_KEY);
        let state = sample_state();

        store.save(&state).unwrap();
        assert!(temp_dir.path().join("davids-dashboard.json").exists());

        let reopened = ProgressStore::new(FileStore::new(temp_dir.path()), DEFAULT_STORAGE_KEY);
        assert_eq!(reopened.load(), state);
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let temp_dir = tempdir().unwrap();
        let mut store = ProgressStore::new(FileStore::new(temp_dir.path()), DEFAULT_STORAGE_KEY);

        store.save(&sample_state()).unwrap();
        store.save(&DashboardState::default()).unwrap();

        assert_eq!(store.load(), DashboardState::default());
    }
}
