use markato_shared::AppSettings;
use tracing::info;

use crate::kv::{read_or_default, write_record, KeyValueStore, StorageError};
use crate::SETTINGS_KEY;

/// Persistence for the single settings record. Settings load once at
/// startup and save on every change.
pub struct SettingsRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SettingsRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persisted settings, or defaults when nothing is stored or the
    /// record is malformed.
    pub fn load(&self) -> AppSettings {
        read_or_default(&self.store, SETTINGS_KEY)
    }

    pub fn save(&self, settings: &AppSettings) -> Result<(), StorageError> {
        write_record(&self.store, SETTINGS_KEY, settings)?;
        info!("settings persisted");
        Ok(())
    }
}
