//! Stateful catalog view driven by UI filter events.

use bazaar_core::{CategoryFilter, Product, ProductId};

use super::{Catalog, PriceRange, QueryParameters, SortKey, query};

/// Holds the current query parameters and the last computed result.
///
/// Every setter recomputes immediately. Before the first query the result
/// is `None`, which is distinct from an empty match set.
#[derive(Debug, Clone)]
pub struct CatalogBrowser {
    catalog: Catalog,
    defaults: QueryParameters,
    params: QueryParameters,
    results: Option<Vec<ProductId>>,
}

impl CatalogBrowser {
    /// Create a browser. Nothing is queried until the first event or
    /// [`CatalogBrowser::refresh`].
    #[must_use]
    pub fn new(catalog: Catalog, defaults: QueryParameters) -> Self {
        Self {
            catalog,
            params: defaults.clone(),
            defaults,
            results: None,
        }
    }

    /// Current parameters.
    #[must_use]
    pub const fn params(&self) -> &QueryParameters {
        &self.params
    }

    /// Last result, resolved to products. `None` until queried.
    #[must_use]
    pub fn results(&self) -> Option<Vec<&Product>> {
        self.results
            .as_ref()
            .map(|ids| ids.iter().filter_map(|id| self.catalog.get(id)).collect())
    }

    /// Last result as identifiers. `None` until queried.
    #[must_use]
    pub fn result_ids(&self) -> Option<&[ProductId]> {
        self.results.as_deref()
    }

    /// `(shown, total)` for a "Showing N of M products" line.
    #[must_use]
    pub fn result_count(&self) -> Option<(usize, usize)> {
        self.results
            .as_ref()
            .map(|ids| (ids.len(), self.catalog.len()))
    }

    /// Recompute the result from the current parameters.
    pub fn refresh(&mut self) {
        let ids: Vec<ProductId> = query(&self.catalog, &self.params)
            .into_iter()
            .map(|product| product.id.clone())
            .collect();
        tracing::debug!(
            search = %self.params.search,
            category = %self.params.category,
            sort = %self.params.sort,
            matches = ids.len(),
            "Catalog query"
        );
        self.results = Some(ids);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.params.search = search.into();
        self.refresh();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.params.category = category;
        self.refresh();
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        self.params.price_range = range;
        self.refresh();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.params.sort = sort;
        self.refresh();
    }

    /// Reset price range and sort order, keeping search and category.
    pub fn clear_filters(&mut self) {
        self.params.price_range = self.defaults.price_range;
        self.params.sort = self.defaults.sort;
        self.refresh();
    }

    /// Reset search, category and price range, keeping sort order. This is
    /// the recovery action offered when nothing matches.
    pub fn clear_search_and_filters(&mut self) {
        self.params.search.clear();
        self.params.category = self.defaults.category.clone();
        self.params.price_range = self.defaults.price_range;
        self.refresh();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn browser() -> CatalogBrowser {
        CatalogBrowser::new(Catalog::demo().unwrap(), QueryParameters::default())
    }

    #[test]
    fn test_not_queried_is_distinct_from_empty() {
        let mut browser = browser();
        assert!(browser.results().is_none());
        assert!(browser.result_count().is_none());

        browser.set_search("no such product");
        assert_eq!(browser.results().unwrap().len(), 0);
        assert_eq!(browser.result_count(), Some((0, 8)));
    }

    #[test]
    fn test_each_event_recomputes() {
        let mut browser = browser();
        browser.set_category(CategoryFilter::from("Electronics"));
        assert_eq!(browser.result_ids().unwrap().len(), 3);

        browser.set_price_range(PriceRange::new(Decimal::ZERO, Decimal::from(100)).unwrap());
        let ids: Vec<&str> = browser
            .result_ids()
            .unwrap()
            .iter()
            .map(ProductId::as_str)
            .collect();
        assert_eq!(ids, ["8"]);

        browser.set_sort(SortKey::Newest);
        assert_eq!(browser.params().sort, SortKey::Newest);
    }

    #[test]
    fn test_clear_filters_keeps_search_and_category() {
        let mut browser = browser();
        browser.set_search("premium");
        browser.set_category(CategoryFilter::from("Kitchen"));
        browser.set_sort(SortKey::Rating);
        browser.set_price_range(PriceRange::new(Decimal::ZERO, Decimal::from(10)).unwrap());

        browser.clear_filters();
        let params = browser.params();
        assert_eq!(params.search, "premium");
        assert_eq!(params.category, CategoryFilter::from("Kitchen"));
        assert_eq!(params.sort, SortKey::Name);
        assert_eq!(params.price_range, PriceRange::default());
        assert_eq!(browser.result_ids().unwrap().len(), 1);
    }

    #[test]
    fn test_clear_search_and_filters_keeps_sort() {
        let mut browser = browser();
        browser.set_sort(SortKey::PriceHighToLow);
        browser.set_search("submarine");
        assert!(browser.results().unwrap().is_empty());

        browser.clear_search_and_filters();
        assert_eq!(browser.params().sort, SortKey::PriceHighToLow);
        assert_eq!(browser.params().category, CategoryFilter::All);
        let results = browser.results().unwrap();
        assert_eq!(results.len(), 8);
        assert_eq!(results.first().unwrap().id.as_str(), "3");
    }
}
