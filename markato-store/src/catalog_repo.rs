use markato_catalog::{now_timestamp, reconcile, MergeOutcome};
use markato_shared::{sanitize_price, NewProduct, ProductItem};
use tracing::info;

use crate::kv::{read_or_default, write_record, KeyValueStore, StorageError};
use crate::PRODUCTS_KEY;

/// Optional field changes for one catalog entry (inline row editing).
/// Absent fields are left as they are.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub original_price: Option<f64>,
}

/// Master catalog operations over an injected key-value substrate.
/// Every operation is a full read-modify-write of the products record.
pub struct CatalogRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> CatalogRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The full master catalog. Missing or corrupt stored data reads as
    /// empty; that is logged, never surfaced as an error.
    pub fn master_products(&self) -> Vec<ProductItem> {
        read_or_default(&self.store, PRODUCTS_KEY)
    }

    /// Replaces the stored catalog wholesale. On failure the previously
    /// persisted state is intact and the error is returned so the caller
    /// can notify the user.
    pub fn save_master_products(&self, products: &[ProductItem]) -> Result<(), StorageError> {
        write_record(&self.store, PRODUCTS_KEY, products)?;
        info!("master catalog persisted ({} items)", products.len());
        Ok(())
    }

    /// Reconciles a batch of candidates against the current catalog and
    /// persists the result once. Returns the new catalog together with the
    /// added/updated/skipped tally.
    pub fn upsert_products(&self, candidates: Vec<NewProduct>) -> Result<MergeOutcome, StorageError> {
        let current = self.master_products();
        let outcome = reconcile(&current, candidates, &now_timestamp());
        self.save_master_products(&outcome.master)?;
        info!(
            "catalog merge: {} added, {} updated, {} skipped of {}",
            outcome.summary.added,
            outcome.summary.updated,
            outcome.summary.skipped,
            outcome.summary.total
        );
        Ok(outcome)
    }

    /// Applies field edits to the entry with the given id and refreshes its
    /// `last_updated`. An absent id leaves the catalog unchanged.
    pub fn update_product(&self, id: &str, update: ProductUpdate) -> Result<Vec<ProductItem>, StorageError> {
        let mut products = self.master_products();
        if let Some(item) = products.iter_mut().find(|p| p.id == id) {
            if let Some(name) = update.name {
                item.name = name;
            }
            if let Some(brand) = update.brand {
                item.brand = brand;
            }
            if let Some(price) = update.original_price {
                item.original_price = sanitize_price(price);
            }
            item.last_updated = now_timestamp();
            self.save_master_products(&products)?;
        }
        Ok(products)
    }

    /// Removes the entry with the given id and persists; a miss is a
    /// silent no-op.
    pub fn delete_product(&self, id: &str) -> Result<Vec<ProductItem>, StorageError> {
        let mut products = self.master_products();
        products.retain(|p| p.id != id);
        self.save_master_products(&products)?;
        Ok(products)
    }

    /// Drops the products record entirely. Saved lists are deliberately
    /// left in place; they have their own bulk delete.
    pub fn clear_all_data(&self) -> Result<(), StorageError> {
        self.store.remove(PRODUCTS_KEY)?;
        info!("master catalog cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use crate::list_repo::ListRepository;
    use markato_shared::{ProductSource, SavedList};

    fn candidate(name: &str, price: f64) -> NewProduct {
        NewProduct::new(name, "", price, "$", ProductSource::Image, "2024-01-01T00:00:00Z")
    }

    #[test]
    fn test_missing_record_reads_as_empty() {
        let repo = CatalogRepository::new(MemoryStore::new());
        assert!(repo.master_products().is_empty());
    }

    #[test]
    fn test_corrupt_record_reads_as_empty() {
        let store = MemoryStore::new();
        store.set(PRODUCTS_KEY, "{definitely not json").unwrap();
        let repo = CatalogRepository::new(store);
        assert!(repo.master_products().is_empty());
    }

    #[test]
    fn test_upsert_persists_and_tallies() {
        let store = MemoryStore::new();
        let repo = CatalogRepository::new(store.clone());

        let outcome = repo.upsert_products(vec![candidate("Coke", 10.0)]).unwrap();
        assert_eq!(outcome.summary.added, 1);

        // A fresh repository over the same store sees the persisted result
        let reread = CatalogRepository::new(store).master_products();
        assert_eq!(reread, outcome.master);
    }

    #[test]
    fn test_upsert_skip_leaves_persisted_entry() {
        let repo = CatalogRepository::new(MemoryStore::new());
        repo.upsert_products(vec![candidate("Coke", 10.0)]).unwrap();

        let outcome = repo.upsert_products(vec![candidate("coke", 5.0)]).unwrap();
        assert_eq!(outcome.summary.skipped, 1);
        assert_eq!(repo.master_products()[0].original_price, 10.0);
    }

    #[test]
    fn test_update_product_edits_fields() {
        let repo = CatalogRepository::new(MemoryStore::new());
        let outcome = repo.upsert_products(vec![candidate("Coke", 10.0)]).unwrap();
        let id = outcome.master[0].id.clone();
        let before = outcome.master[0].last_updated.clone();

        let update = ProductUpdate {
            name: Some("Coca-Cola".to_string()),
            original_price: Some(-4.0),
            ..ProductUpdate::default()
        };
        let products = repo.update_product(&id, update).unwrap();
        assert_eq!(products[0].name, "Coca-Cola");
        assert_eq!(products[0].original_price, 0.0);
        assert!(products[0].last_updated >= before);
        assert_eq!(products[0].id, id);
    }

    #[test]
    fn test_update_absent_id_is_noop() {
        let repo = CatalogRepository::new(MemoryStore::new());
        repo.upsert_products(vec![candidate("Coke", 10.0)]).unwrap();
        let before = repo.master_products();

        let after = repo
            .update_product("ghost", ProductUpdate { name: Some("x".to_string()), ..ProductUpdate::default() })
            .unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn test_delete_absent_id_is_noop() {
        let repo = CatalogRepository::new(MemoryStore::new());
        repo.upsert_products(vec![candidate("Coke", 10.0)]).unwrap();

        let after = repo.delete_product("ghost").unwrap();
        assert_eq!(after.len(), 1);
    }

    #[test]
    fn test_delete_product_removes_by_id() {
        let repo = CatalogRepository::new(MemoryStore::new());
        let outcome = repo.upsert_products(vec![candidate("Coke", 10.0), candidate("Pepsi", 9.0)]).unwrap();
        let id = outcome.master[0].id.clone();

        let after = repo.delete_product(&id).unwrap();
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].name, "Pepsi");
        assert_eq!(repo.master_products(), after);
    }

    #[test]
    fn test_clear_all_data_spares_saved_lists() {
        let store = MemoryStore::new();
        let products = CatalogRepository::new(store.clone());
        let lists = ListRepository::new(store);

        products.upsert_products(vec![candidate("Coke", 10.0)]).unwrap();
        lists
            .save_list(SavedList {
                id: "l1".to_string(),
                name: "June order".to_string(),
                items: vec![],
                date: "2024-06-01T00:00:00Z".to_string(),
            })
            .unwrap();

        products.clear_all_data().unwrap();
        assert!(products.master_products().is_empty());
        assert_eq!(lists.saved_lists().len(), 1);
    }

    /// Substrate whose writes always fail, for exercising quota-style
    /// failures.
    #[derive(Clone)]
    struct FailingWrites(MemoryStore);

    impl KeyValueStore for FailingWrites {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key)
        }
        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed { key: key.to_string(), reason: "quota exceeded".to_string() })
        }
        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.0.remove(key)
        }
    }

    #[test]
    fn test_failed_write_keeps_previous_state() {
        let inner = MemoryStore::new();
        CatalogRepository::new(inner.clone())
            .upsert_products(vec![candidate("Coke", 10.0)])
            .unwrap();

        let failing = CatalogRepository::new(FailingWrites(inner.clone()));
        let result = failing.upsert_products(vec![candidate("Pepsi", 9.0)]);
        assert!(result.is_err());

        // The persisted record still holds only the first import
        let reread = CatalogRepository::new(inner).master_products();
        assert_eq!(reread.len(), 1);
        assert_eq!(reread[0].name, "Coke");
    }
}
