pub mod app_config;
pub mod catalog_repo;
pub mod kv;
pub mod list_repo;
pub mod settings_repo;

pub use app_config::Config;
pub use catalog_repo::{CatalogRepository, ProductUpdate};
pub use kv::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use list_repo::ListRepository;
pub use settings_repo::SettingsRepository;

/// The three fixed record keys. Each record is an independent JSON
/// document; there is no cross-record transaction, last writer wins.
pub(crate) const PRODUCTS_KEY: &str = "master_products";
pub(crate) const LISTS_KEY: &str = "saved_lists";
pub(crate) const SETTINGS_KEY: &str = "settings";
