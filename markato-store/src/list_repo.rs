use markato_shared::SavedList;
use tracing::info;

use crate::kv::{read_or_default, write_record, KeyValueStore, StorageError};
use crate::LISTS_KEY;

/// Saved-lists history over an injected key-value substrate. Lists are
/// keyed by id; saving an existing id replaces that list wholesale.
pub struct ListRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ListRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All saved lists, newest first. Missing or corrupt stored data reads
    /// as empty.
    pub fn saved_lists(&self) -> Vec<SavedList> {
        let mut lists: Vec<SavedList> = read_or_default(&self.store, LISTS_KEY);
        lists.sort_by(|a, b| b.date.cmp(&a.date));
        lists
    }

    /// Inserts the list, or replaces the one sharing its id. Returns the
    /// resulting collection; on write failure the previously persisted
    /// collection stays in place and the error is surfaced.
    pub fn save_list(&self, list: SavedList) -> Result<Vec<SavedList>, StorageError> {
        let mut lists = self.saved_lists();
        match lists.iter_mut().find(|l| l.id == list.id) {
            Some(existing) => *existing = list,
            None => lists.push(list),
        }
        lists.sort_by(|a, b| b.date.cmp(&a.date));
        write_record(&self.store, LISTS_KEY, &lists)?;
        info!("saved-lists history persisted ({} lists)", lists.len());
        Ok(lists)
    }

    /// Removes the list with the given id; a miss is a silent no-op.
    pub fn delete_list(&self, id: &str) -> Result<Vec<SavedList>, StorageError> {
        let mut lists = self.saved_lists();
        lists.retain(|l| l.id != id);
        write_record(&self.store, LISTS_KEY, &lists)?;
        Ok(lists)
    }

    /// Drops the whole history record.
    pub fn delete_all_lists(&self) -> Result<(), StorageError> {
        self.store.remove(LISTS_KEY)?;
        info!("saved-lists history cleared");
        Ok(())
    }
}
