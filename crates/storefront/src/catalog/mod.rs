//! Static product catalog and the query engine over it.
//!
//! The catalog is loaded once at startup and shared read-only. Queries
//! never reorder or mutate it; they return new orderings of borrowed
//! products.

mod browser;
mod query;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use bazaar_core::{CategoryFilter, Product, ProductError, ProductId};
use thiserror::Error;

pub use browser::CatalogBrowser;
pub use query::{DEFAULT_PRICE_CEILING, PriceRange, QueryError, QueryParameters, SortKey, query};

/// Catalog bundled with the crate, used when no catalog path is configured.
const DEMO_CATALOG: &str = include_str!("../../data/catalog.json");

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog JSON is malformed.
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two products share an identifier.
    #[error("Duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// A product failed validation.
    #[error("Invalid product: {0}")]
    InvalidProduct(#[from] ProductError),
}

/// The read-only product catalog.
///
/// Cheaply cloneable via `Arc`; every store and the browser hold a clone.
#[derive(Debug, Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

#[derive(Debug)]
struct CatalogInner {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from product records, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two products share an id, or
    /// [`CatalogError::InvalidProduct`] if a record fails validation.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            product.validate()?;
            if index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }

        Ok(Self {
            inner: Arc::new(CatalogInner { products, index }),
        })
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON, plus anything
    /// [`Catalog::new`] rejects.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, plus anything
    /// [`Catalog::from_json`] rejects.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), products = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// The bundled eight-product demo catalog.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled data is itself invalid.
    pub fn demo() -> Result<Self, CatalogError> {
        Self::from_json(DEMO_CATALOG)
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.inner
            .index
            .get(id)
            .and_then(|&position| self.inner.products.get(position))
    }

    /// Whether a product with this id exists.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.inner.index.contains_key(id)
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.inner.products
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.inner.products.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.products.is_empty()
    }

    /// Category choices for a filter control: `All` first, then each
    /// distinct category in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<CategoryFilter> {
        let mut seen = Vec::new();
        for product in self.iter() {
            if !seen.contains(&product.category) {
                seen.push(product.category.clone());
            }
        }

        std::iter::once(CategoryFilter::All)
            .chain(seen.into_iter().map(CategoryFilter::Only))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::parse(s).unwrap()
    }

    #[test]
    fn test_demo_catalog_loads() {
        let catalog = Catalog::demo().unwrap();
        assert_eq!(catalog.len(), 8);
        assert_eq!(
            catalog.get(&id("8")).unwrap().name,
            "Wireless Bluetooth Speaker"
        );
    }

    #[test]
    fn test_get_unknown() {
        let catalog = Catalog::demo().unwrap();
        assert!(catalog.get(&id("99")).is_none());
        assert!(!catalog.contains(&id("99")));
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let catalog = Catalog::demo().unwrap();
        let labels: Vec<String> = catalog
            .categories()
            .into_iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(
            labels,
            [
                "All",
                "Electronics",
                "Photography",
                "Furniture",
                "Home",
                "Kitchen",
                "Fashion"
            ]
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let catalog = Catalog::demo().unwrap();
        let mut products = catalog.products().to_vec();
        products.push(products[0].clone());
        assert!(matches!(
            Catalog::new(products),
            Err(CatalogError::DuplicateId(_))
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        let json = r#"[{
            "id": "x", "name": "Broken", "description": "", "price": -1,
            "image": "", "category": "Home", "stock": 1, "rating": 3, "reviews": 0
        }]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::InvalidProduct(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Catalog::from_json("[{"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.categories(), vec![CategoryFilter::All]);
    }

    #[test]
    fn test_from_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("catalog.json");
        std::fs::write(&path, DEMO_CATALOG).unwrap();
        assert_eq!(Catalog::from_path(&path).unwrap().len(), 8);

        let missing = tmp.path().join("missing.json");
        assert!(matches!(
            Catalog::from_path(&missing),
            Err(CatalogError::Io { .. })
        ));
    }
}
