//! Catalog semantics on top of blob storage.

use crate::{BlobStore, CatalogSnapshot};
use homecraft_core::{Product, ProductDraft, ProductId};
use homecraft_error::{HomecraftResult, JsonError, JsonErrorKind};

/// The product catalog.
///
/// Owns the ordered product collection, the edit selection, and the id
/// counter, and writes the whole state back through its blob store after
/// every mutating operation. The blob is read exactly once, at open.
pub struct Catalog {
    store: Box<dyn BlobStore>,
    key: String,
    snapshot: CatalogSnapshot,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("key", &self.key)
            .field("snapshot", &self.snapshot)
            .finish_non_exhaustive()
    }
}

impl Catalog {
    /// Open a catalog from a blob store.
    ///
    /// A missing blob yields an empty catalog. The loaded state is
    /// normalized: the id counter is bumped past every live id, and a
    /// selection that no longer resolves to a live product is cleared.
    ///
    /// # Arguments
    ///
    /// * `store` - Backend the catalog persists through
    /// * `key` - Blob name the catalog state lives under
    ///
    /// # Errors
    ///
    /// Returns error if the blob cannot be read or does not parse as a
    /// catalog snapshot.
    #[tracing::instrument(skip(store, key))]
    pub fn open(store: Box<dyn BlobStore>, key: impl Into<String>) -> HomecraftResult<Self> {
        let key = key.into();

        let mut snapshot = match store.load(&key)? {
            Some(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                JsonError::new(JsonErrorKind::SnapshotParse(format!("'{}': {}", key, e)))
            })?,
            None => CatalogSnapshot::default(),
        };

        // next_id must exceed every live id, even in a hand-edited blob
        let max_id = snapshot
            .products
            .iter()
            .map(|p| p.id.value())
            .max()
            .unwrap_or(0);
        snapshot.next_id = snapshot.next_id.max(max_id + 1);

        if let Some(id) = snapshot.selected
            && !snapshot.products.iter().any(|p| p.id == id)
        {
            snapshot.selected = None;
        }

        tracing::debug!(
            key = %key,
            count = snapshot.products.len(),
            "Opened catalog"
        );

        Ok(Self {
            store,
            key,
            snapshot,
        })
    }

    /// The ordered product collection.
    pub fn products(&self) -> &[Product] {
        &self.snapshot.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.snapshot.products.iter().find(|p| p.id == id)
    }

    /// Id of the product currently selected for editing, if any.
    pub fn selected(&self) -> Option<ProductId> {
        self.snapshot.selected
    }

    /// The selected product, looked up in the live collection.
    pub fn selected_product(&self) -> Option<&Product> {
        self.snapshot.selected.and_then(|id| self.get(id))
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.snapshot.products.len()
    }

    /// Whether the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.snapshot.products.is_empty()
    }

    /// Add a product to the end of the collection.
    ///
    /// The catalog assigns the id from its counter; ids are never reused,
    /// so deleted ids leave permanent gaps.
    ///
    /// # Returns
    ///
    /// The id assigned to the new product
    #[tracing::instrument(skip(self, draft), fields(title = %draft.title))]
    pub fn add(&mut self, draft: ProductDraft) -> HomecraftResult<ProductId> {
        let id = ProductId::from(self.snapshot.next_id);
        self.snapshot.next_id += 1;
        self.snapshot.products.push(draft.into_product(id));
        self.persist()?;

        tracing::info!(id = %id, "Added product");
        Ok(id)
    }

    /// Overwrite the first product whose id matches.
    ///
    /// A miss is a silent no-op apart from the persisted write; the caller
    /// learns about it only through the return value.
    ///
    /// # Returns
    ///
    /// `true` if a product was overwritten, `false` if no id matched
    #[tracing::instrument(skip(self, product), fields(id = %product.id))]
    pub fn update(&mut self, product: Product) -> HomecraftResult<bool> {
        let matched = match self
            .snapshot
            .products
            .iter_mut()
            .find(|p| p.id == product.id)
        {
            Some(entry) => {
                *entry = product;
                true
            }
            None => {
                tracing::debug!("Update matched no product");
                false
            }
        };
        self.persist()?;

        if matched {
            tracing::info!("Updated product");
        }
        Ok(matched)
    }

    /// Remove the product whose id matches, if any.
    ///
    /// Always persisted, even when nothing matched. Removing the selected
    /// product clears the selection.
    ///
    /// # Returns
    ///
    /// `true` if a product was removed, `false` if no id matched
    #[tracing::instrument(skip(self), fields(id = %id))]
    pub fn remove(&mut self, id: ProductId) -> HomecraftResult<bool> {
        let before = self.snapshot.products.len();
        self.snapshot.products.retain(|p| p.id != id);
        let removed = self.snapshot.products.len() < before;

        if self.snapshot.selected == Some(id) {
            self.snapshot.selected = None;
        }
        self.persist()?;

        if removed {
            tracing::info!("Removed product");
        } else {
            tracing::debug!("Remove matched no product");
        }
        Ok(removed)
    }

    /// Set or clear the edit selection.
    ///
    /// An id that matches no live product normalizes to no selection rather
    /// than a dangling reference.
    ///
    /// # Returns
    ///
    /// The selection after normalization
    #[tracing::instrument(skip(self))]
    pub fn select_for_edit(&mut self, id: Option<ProductId>) -> HomecraftResult<Option<ProductId>> {
        let normalized = id.filter(|id| self.get(*id).is_some());
        self.snapshot.selected = normalized;
        self.persist()?;

        tracing::debug!(selected = ?normalized, "Selection changed");
        Ok(normalized)
    }

    /// Filter products whose title contains the query as a substring.
    ///
    /// The query is lowercased; titles are matched verbatim. An empty query
    /// matches everything.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.snapshot
            .products
            .iter()
            .filter(|p| p.title.contains(&needle))
            .collect()
    }

    /// Serialize the snapshot and write it through the blob store.
    fn persist(&mut self) -> HomecraftResult<()> {
        let bytes = serde_json::to_vec(&self.snapshot)
            .map_err(|e| JsonError::new(JsonErrorKind::SnapshotSerialize(e.to_string())))?;
        self.store.save(&self.key, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory blob store for testing.
    #[derive(Default)]
    struct MemoryStore(HashMap<String, Vec<u8>>);

    impl BlobStore for MemoryStore {
        fn load(&self, name: &str) -> HomecraftResult<Option<Vec<u8>>> {
            Ok(self.0.get(name).cloned())
        }

        fn save(&mut self, name: &str, bytes: &[u8]) -> HomecraftResult<()> {
            self.0.insert(name.to_string(), bytes.to_vec());
            Ok(())
        }

        fn exists(&self, name: &str) -> HomecraftResult<bool> {
            Ok(self.0.contains_key(name))
        }
    }

    fn draft(title: &str) -> ProductDraft {
        ProductDraft::builder()
            .title(title)
            .price(100000.0)
            .img("http://x/y.png")
            .rate(4)
            .description("desc")
            .build()
    }

    fn empty_catalog() -> Catalog {
        Catalog::open(Box::new(MemoryStore::default()), "products").unwrap()
    }

    #[test]
    fn test_first_add_assigns_id_one() {
        let mut catalog = empty_catalog();
        let id = catalog.add(draft("Shoe")).unwrap();

        assert_eq!(id.value(), 1);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(id).unwrap().title, "Shoe");
    }

    #[test]
    fn test_ids_never_reused_after_remove() {
        let mut catalog = empty_catalog();
        let first = catalog.add(draft("Shoe")).unwrap();
        let second = catalog.add(draft("Lamp")).unwrap();
        assert_eq!(second.value(), 2);

        assert!(catalog.remove(second).unwrap());
        let third = catalog.add(draft("Chair")).unwrap();

        assert_eq!(third.value(), 3); // Not 2
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get(first).is_some());
        assert!(catalog.get(second).is_none());
    }

    #[test]
    fn test_update_overwrites_matching_product() {
        let mut catalog = empty_catalog();
        let first = catalog.add(draft("Shoe")).unwrap();
        let second = catalog.add(draft("Lamp")).unwrap();

        let mut changed = catalog.get(first).unwrap().clone();
        changed.price = 999.0;
        assert!(catalog.update(changed).unwrap());

        assert_eq!(catalog.get(first).unwrap().price, 999.0);
        assert_eq!(catalog.get(second).unwrap().price, 100000.0);
    }

    #[test]
    fn test_update_miss_is_silent() {
        let mut catalog = empty_catalog();
        catalog.add(draft("Shoe")).unwrap();

        let phantom = draft("Ghost").into_product(42.into());
        assert!(!catalog.update(phantom).unwrap());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].title, "Shoe");
    }

    #[test]
    fn test_remove_miss_is_idempotent() {
        let mut catalog = empty_catalog();
        catalog.add(draft("Shoe")).unwrap();

        assert!(!catalog.remove(42.into()).unwrap());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_selection_normalizes_misses_to_none() {
        let mut catalog = empty_catalog();
        let id = catalog.add(draft("Shoe")).unwrap();

        assert_eq!(catalog.select_for_edit(Some(id)).unwrap(), Some(id));
        assert_eq!(catalog.selected_product().unwrap().title, "Shoe");

        assert_eq!(catalog.select_for_edit(Some(42.into())).unwrap(), None);
        assert_eq!(catalog.selected(), None);
    }

    #[test]
    fn test_remove_clears_matching_selection() {
        let mut catalog = empty_catalog();
        let first = catalog.add(draft("Shoe")).unwrap();
        let second = catalog.add(draft("Lamp")).unwrap();

        catalog.select_for_edit(Some(first)).unwrap();
        catalog.remove(second).unwrap();
        assert_eq!(catalog.selected(), Some(first)); // Unrelated remove keeps it

        catalog.remove(first).unwrap();
        assert_eq!(catalog.selected(), None);
    }

    #[test]
    fn test_search_lowercases_query_only() {
        let mut catalog = empty_catalog();
        catalog.add(draft("Shoe")).unwrap();
        catalog.add(draft("lamp")).unwrap();

        // Lowercased query against verbatim titles
        assert_eq!(catalog.search("hoe").len(), 1);
        assert_eq!(catalog.search("LAMP").len(), 1);
        assert_eq!(catalog.search("SHOE").len(), 0); // "shoe" not in "Shoe"
        assert_eq!(catalog.search("").len(), 2);
    }

    #[test]
    fn test_corrupt_blob_is_a_snapshot_parse_error() {
        use homecraft_error::HomecraftErrorKind;

        let mut store = MemoryStore::default();
        store.save("products", b"not json").unwrap();

        let err = Catalog::open(Box::new(store), "products").unwrap_err();
        assert!(matches!(
            err.kind(),
            HomecraftErrorKind::Json(json) if matches!(json.kind, JsonErrorKind::SnapshotParse(_))
        ));
    }

    #[test]
    fn test_open_bumps_counter_past_live_ids() {
        let snapshot = CatalogSnapshot {
            products: vec![draft("Shoe").into_product(5.into())],
            selected: None,
            next_id: 1,
        };
        let mut store = MemoryStore::default();
        store
            .save("products", &serde_json::to_vec(&snapshot).unwrap())
            .unwrap();

        let mut catalog = Catalog::open(Box::new(store), "products").unwrap();
        assert_eq!(catalog.add(draft("Lamp")).unwrap().value(), 6);
    }

    #[test]
    fn test_open_clears_dangling_selection() {
        let snapshot = CatalogSnapshot {
            products: vec![draft("Shoe").into_product(1.into())],
            selected: Some(9.into()),
            next_id: 2,
        };
        let mut store = MemoryStore::default();
        store
            .save("products", &serde_json::to_vec(&snapshot).unwrap())
            .unwrap();

        let catalog = Catalog::open(Box::new(store), "products").unwrap();
        assert_eq!(catalog.selected(), None);
    }
}
