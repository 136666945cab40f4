//! Storefront state.
//!
//! [`Storefront`] owns the catalog browser and the three persisted stores.
//! Hosts feed it [`StorefrontEvent`]s and read back results and badges.

use bazaar_core::{CategoryFilter, Price, ProductId, Theme};
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogBrowser, PriceRange, QueryParameters, SortKey};
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::storage::{FileStorage, SharedStorage};
use crate::stores::{CartStore, ThemeStore, WishlistStore};

/// A user interaction the storefront reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StorefrontEvent {
    SearchChanged { search: String },
    CategoryChanged { category: CategoryFilter },
    PriceRangeChanged { range: PriceRange },
    SortChanged { sort: SortKey },
    /// Reset price range and sort.
    FiltersCleared,
    /// Reset search, category and price range.
    SearchAndFiltersCleared,
    AddToCart { product_id: ProductId },
    RemoveFromCart { product_id: ProductId },
    /// Set a quantity; zero or less removes the entry.
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    ClearCart,
    AddToWishlist { product_id: ProductId },
    RemoveFromWishlist { product_id: ProductId },
    ToggleWishlist { product_id: ProductId },
    ClearWishlist,
    ToggleTheme,
}

/// Header badge values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontSummary {
    pub cart_item_count: u64,
    pub wishlist_count: usize,
    pub cart_total: Price,
    pub theme: Theme,
}

/// The storefront: catalog browser plus cart, wishlist and theme stores
/// sharing one storage backend.
#[derive(Debug)]
pub struct Storefront {
    catalog: Catalog,
    browser: CatalogBrowser,
    cart: CartStore,
    wishlist: WishlistStore,
    theme: ThemeStore,
}

impl Storefront {
    /// Assemble a storefront over an already-loaded catalog and storage.
    ///
    /// Stores are loaded from `storage` and the browser runs its first query
    /// with the configured defaults.
    #[must_use]
    pub fn new(catalog: Catalog, storage: SharedStorage, config: &StorefrontConfig) -> Self {
        let mut browser = CatalogBrowser::new(
            catalog.clone(),
            QueryParameters::with_price_ceiling(config.price_ceiling),
        );
        browser.refresh();

        let cart = CartStore::load(catalog.clone(), storage.clone(), config.currency_code);
        let wishlist = WishlistStore::load(catalog.clone(), storage.clone());
        let theme = ThemeStore::load(storage);

        tracing::info!(
            products = catalog.len(),
            cart_items = cart.item_count(),
            wishlist = wishlist.wishlist_count(),
            theme = %theme.current(),
            "Storefront ready"
        );

        Self {
            catalog,
            browser,
            cart,
            wishlist,
            theme,
        }
    }

    /// Load the configured catalog and open file-backed storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or the storage
    /// directory cannot be created.
    pub fn open(config: &StorefrontConfig) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::demo()?,
        };
        let storage = FileStorage::open(config.storage_dir.clone())?;
        tracing::info!(dir = %storage.dir().display(), "Opened storage");

        Ok(Self::new(catalog, std::sync::Arc::new(storage), config))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn browser(&self) -> &CatalogBrowser {
        &self.browser
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    #[must_use]
    pub const fn wishlist(&self) -> &WishlistStore {
        &self.wishlist
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme.current()
    }

    #[must_use]
    pub fn summary(&self) -> StorefrontSummary {
        StorefrontSummary {
            cart_item_count: self.cart.item_count(),
            wishlist_count: self.wishlist.wishlist_count(),
            cart_total: self.cart.total(),
            theme: self.theme.current(),
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Apply one event. Events naming an unknown product are ignored.
    pub fn dispatch(&mut self, event: StorefrontEvent) {
        tracing::debug!(?event, "Dispatching storefront event");

        match event {
            StorefrontEvent::SearchChanged { search } => self.browser.set_search(search),
            StorefrontEvent::CategoryChanged { category } => self.browser.set_category(category),
            StorefrontEvent::PriceRangeChanged { range } => self.browser.set_price_range(range),
            StorefrontEvent::SortChanged { sort } => self.browser.set_sort(sort),
            StorefrontEvent::FiltersCleared => self.browser.clear_filters(),
            StorefrontEvent::SearchAndFiltersCleared => self.browser.clear_search_and_filters(),
            StorefrontEvent::AddToCart { product_id } => match self.catalog.get(&product_id) {
                Some(product) => self.cart.add_to_cart(product),
                None => unknown_product(&product_id),
            },
            StorefrontEvent::RemoveFromCart { product_id } => {
                self.cart.remove_from_cart(&product_id);
            }
            StorefrontEvent::UpdateQuantity {
                product_id,
                quantity,
            } => self.cart.update_quantity(&product_id, quantity),
            StorefrontEvent::ClearCart => self.cart.clear_cart(),
            StorefrontEvent::AddToWishlist { product_id } => match self.catalog.get(&product_id) {
                Some(product) => self.wishlist.add_to_wishlist(product),
                None => unknown_product(&product_id),
            },
            StorefrontEvent::RemoveFromWishlist { product_id } => {
                self.wishlist.remove_from_wishlist(&product_id);
            }
            StorefrontEvent::ToggleWishlist { product_id } => match self.catalog.get(&product_id) {
                Some(product) => {
                    self.wishlist.toggle(product);
                }
                None => unknown_product(&product_id),
            },
            StorefrontEvent::ClearWishlist => self.wishlist.clear_wishlist(),
            StorefrontEvent::ToggleTheme => {
                self.theme.toggle();
            }
        }
    }
}

fn unknown_product(product_id: &ProductId) {
    tracing::warn!(%product_id, "Ignoring event for unknown product");
}
