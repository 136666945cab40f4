//! Wishlist store: an ordered set of saved products.

use bazaar_core::{Product, ProductId};

use crate::catalog::Catalog;
use crate::storage::{SharedStorage, keys, load_json_list, remove_key, save_json};

/// Saved products in the order they were added. Each product at most once.
pub struct WishlistStore {
    catalog: Catalog,
    storage: SharedStorage,
    entries: Vec<ProductId>,
}

impl std::fmt::Debug for WishlistStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WishlistStore")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

impl WishlistStore {
    /// Load the wishlist from storage, treating missing or malformed data as
    /// empty. Undecodable, unknown and duplicate ids are dropped.
    #[must_use]
    pub fn load(catalog: Catalog, storage: SharedStorage) -> Self {
        let stored: Vec<ProductId> = load_json_list(storage.as_ref(), keys::WISHLIST);

        let mut entries: Vec<ProductId> = Vec::with_capacity(stored.len());
        for product_id in stored {
            if !catalog.contains(&product_id) {
                tracing::warn!(%product_id, "Dropping wishlist entry for unknown product");
            } else if !entries.contains(&product_id) {
                entries.push(product_id);
            }
        }
        tracing::debug!(entries = entries.len(), "Loaded wishlist");

        Self {
            catalog,
            storage,
            entries,
        }
    }

    /// Save `product`. Already-saved and unknown products are a no-op.
    pub fn add_to_wishlist(&mut self, product: &Product) {
        if !self.catalog.contains(&product.id) {
            tracing::debug!(product_id = %product.id, "Ignoring wishlist add of unknown product");
            return;
        }
        if self.is_in_wishlist(&product.id) {
            return;
        }

        self.entries.push(product.id.clone());
        self.persist();
    }

    /// Remove `product_id`. Absent ids are a no-op.
    pub fn remove_from_wishlist(&mut self, product_id: &ProductId) {
        let before = self.entries.len();
        self.entries.retain(|id| id != product_id);

        if self.entries.len() != before {
            self.persist();
        }
    }

    /// Remove if saved, otherwise save. Returns whether the product is saved
    /// afterwards.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.is_in_wishlist(&product.id) {
            self.remove_from_wishlist(&product.id);
        } else {
            self.add_to_wishlist(product);
        }
        self.is_in_wishlist(&product.id)
    }

    #[must_use]
    pub fn is_in_wishlist(&self, product_id: &ProductId) -> bool {
        self.entries.contains(product_id)
    }

    /// Remove every entry and delete the stored wishlist.
    pub fn clear_wishlist(&mut self) {
        self.entries.clear();
        remove_key(self.storage.as_ref(), keys::WISHLIST);
    }

    #[must_use]
    pub fn wishlist_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn entries(&self) -> &[ProductId] {
        &self.entries
    }

    /// Saved products resolved against the catalog, in insertion order.
    #[must_use]
    pub fn products(&self) -> Vec<&Product> {
        self.entries
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .collect()
    }

    fn persist(&self) {
        save_json(self.storage.as_ref(), keys::WISHLIST, &self.entries);
    }
}
