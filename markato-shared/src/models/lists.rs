use serde::{Deserialize, Serialize};

use super::product::ProductItem;

/// A named, timestamped snapshot of a working set. Immutable once saved
/// except for wholesale replacement by re-saving the same id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedList {
    pub id: String,
    pub name: String,
    pub items: Vec<ProductItem>,
    /// ISO 8601 creation timestamp
    pub date: String,
}

/// Transient report of one merge operation, returned to the caller and
/// never persisted. `added + updated + skipped == total` always holds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    pub updated: usize,
    pub skipped: usize,
    pub total: usize,
}
