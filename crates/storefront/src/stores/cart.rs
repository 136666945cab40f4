//! Shopping cart store.
//!
//! Entries reference catalog products by id. Totals are derived on every
//! read from the catalog's current prices. The store performs no stock
//! check; hosts disable add-to-cart for out-of-stock products.

use bazaar_core::{CurrencyCode, Price, Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::storage::{SharedStorage, keys, load_json_list, remove_key, save_json};

/// One cart line as persisted: a product reference and a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A cart entry resolved against the catalog, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine<'a> {
    pub product: &'a Product,
    pub quantity: u32,
    pub unit_price: Price,
    pub line_total: Price,
}

/// The cart. At most one entry per product; quantities are at least 1.
pub struct CartStore {
    catalog: Catalog,
    storage: SharedStorage,
    currency_code: CurrencyCode,
    entries: Vec<CartEntry>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("currency_code", &self.currency_code)
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Load the cart from storage.
    ///
    /// Missing or malformed data yields an empty cart. Within a stored list,
    /// entries that fail to decode, entries for products no longer in the
    /// catalog and zero-quantity entries are dropped individually; duplicate
    /// entries are merged.
    #[must_use]
    pub fn load(catalog: Catalog, storage: SharedStorage, currency_code: CurrencyCode) -> Self {
        let stored: Vec<CartEntry> = load_json_list(storage.as_ref(), keys::CART);
        let entries = sanitize(&catalog, stored);
        tracing::debug!(entries = entries.len(), "Loaded cart");

        Self {
            catalog,
            storage,
            currency_code,
            entries,
        }
    }

    /// Add one unit of `product`, creating the entry if needed.
    ///
    /// Products that are not in the catalog are ignored.
    pub fn add_to_cart(&mut self, product: &Product) {
        if !self.catalog.contains(&product.id) {
            tracing::debug!(product_id = %product.id, "Ignoring add of unknown product");
            return;
        }

        match self.entry_mut(&product.id) {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(1),
            None => self.entries.push(CartEntry {
                product_id: product.id.clone(),
                quantity: 1,
            }),
        }
        self.persist();
    }

    /// Remove the entry for `product_id`. Absent entries are a no-op.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        let before = self.entries.len();
        self.entries.retain(|entry| &entry.product_id != product_id);

        if self.entries.len() == before {
            tracing::debug!(%product_id, "Remove of product not in cart");
            return;
        }
        self.persist();
    }

    /// Set the quantity for an existing entry.
    ///
    /// Zero or negative quantities remove the entry. Unknown entries are a
    /// no-op; this never creates an entry.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(product_id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let Some(entry) = self.entry_mut(product_id) else {
            tracing::debug!(%product_id, "Quantity update for product not in cart");
            return;
        };
        entry.quantity = quantity;
        self.persist();
    }

    /// Remove every entry and delete the stored cart.
    pub fn clear_cart(&mut self) {
        self.entries.clear();
        remove_key(self.storage.as_ref(), keys::CART);
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.quantity_of(product_id) > 0
    }

    /// Quantity in the cart for `product_id`, zero if absent.
    #[must_use]
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.entries
            .iter()
            .find(|entry| &entry.product_id == product_id)
            .map_or(0, |entry| entry.quantity)
    }

    /// Sum of quantities across entries.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| u64::from(entry.quantity))
            .sum()
    }

    /// Sum of unit price times quantity, at current catalog prices.
    ///
    /// Saturates at [`Decimal::MAX`].
    #[must_use]
    pub fn total(&self) -> Price {
        let amount = self
            .entries
            .iter()
            .filter_map(|entry| {
                self.catalog
                    .get(&entry.product_id)
                    .map(|product| product.price.saturating_mul(Decimal::from(entry.quantity)))
            })
            .fold(Decimal::ZERO, Decimal::saturating_add);
        Price::new(amount, self.currency_code)
    }

    /// Entries resolved against the catalog.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine<'_>> {
        self.entries
            .iter()
            .filter_map(|entry| {
                let product = self.catalog.get(&entry.product_id)?;
                let unit_price = product.unit_price(self.currency_code);
                Some(CartLine {
                    product,
                    quantity: entry.quantity,
                    unit_price,
                    line_total: unit_price.times(entry.quantity),
                })
            })
            .collect()
    }

    fn entry_mut(&mut self, product_id: &ProductId) -> Option<&mut CartEntry> {
        self.entries
            .iter_mut()
            .find(|entry| &entry.product_id == product_id)
    }

    fn persist(&self) {
        save_json(self.storage.as_ref(), keys::CART, &self.entries);
    }
}

/// Restore the cart invariants on data read from storage.
fn sanitize(catalog: &Catalog, stored: Vec<CartEntry>) -> Vec<CartEntry> {
    let mut entries: Vec<CartEntry> = Vec::with_capacity(stored.len());

    for entry in stored {
        if entry.quantity == 0 {
            continue;
        }
        if !catalog.contains(&entry.product_id) {
            tracing::warn!(product_id = %entry.product_id, "Dropping cart entry for unknown product");
            continue;
        }

        match entries
            .iter_mut()
            .find(|existing| existing.product_id == entry.product_id)
        {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(entry.quantity),
            None => entries.push(entry),
        }
    }

    entries
}
