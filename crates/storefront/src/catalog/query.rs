//! Catalog query engine: filter, then sort.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use bazaar_core::{CategoryFilter, Product};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Catalog;

/// Default upper bound of the price filter.
pub const DEFAULT_PRICE_CEILING: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Errors raised when building query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Lower bound is above the upper bound.
    #[error("price range lower bound {low} exceeds upper bound {high}")]
    InvertedPriceRange { low: Decimal, high: Decimal },

    /// A bound is below zero.
    #[error("price range bounds cannot be negative (got {0})")]
    NegativeBound(Decimal),

    /// Sort key name is not recognized.
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
}

/// Inclusive price bounds with `low <= high`.
///
/// Serialized as a two-element array, `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(Decimal, Decimal)", into = "(Decimal, Decimal)")]
pub struct PriceRange {
    low: Decimal,
    high: Decimal,
}

impl PriceRange {
    /// Create a validated range.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NegativeBound`] or
    /// [`QueryError::InvertedPriceRange`].
    pub fn new(low: Decimal, high: Decimal) -> Result<Self, QueryError> {
        for bound in [low, high] {
            if bound < Decimal::ZERO {
                return Err(QueryError::NegativeBound(bound));
            }
        }
        if low > high {
            return Err(QueryError::InvertedPriceRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// `[0, ceiling]`; a negative ceiling is clamped to zero.
    #[must_use]
    pub fn up_to(ceiling: Decimal) -> Self {
        Self {
            low: Decimal::ZERO,
            high: ceiling.max(Decimal::ZERO),
        }
    }

    #[must_use]
    pub const fn low(&self) -> Decimal {
        self.low
    }

    #[must_use]
    pub const fn high(&self) -> Decimal {
        self.high
    }

    /// Inclusive containment check.
    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        self.low <= price && price <= self.high
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::up_to(DEFAULT_PRICE_CEILING)
    }
}

impl TryFrom<(Decimal, Decimal)> for PriceRange {
    type Error = QueryError;

    fn try_from((low, high): (Decimal, Decimal)) -> Result<Self, Self::Error> {
        Self::new(low, high)
    }
}

impl From<PriceRange> for (Decimal, Decimal) {
    fn from(range: PriceRange) -> Self {
        (range.low, range.high)
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Name, A to Z, ignoring case.
    #[default]
    #[serde(rename = "name")]
    Name,
    /// Cheapest first.
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    /// Most expensive first.
    #[serde(rename = "price-high")]
    PriceHighToLow,
    /// Highest rated first.
    #[serde(rename = "rating")]
    Rating,
    /// Reverse identifier order.
    ///
    /// Products carry no creation timestamp; identifiers are assigned in
    /// insertion order, so the reverse-lexicographic id stands in for
    /// recency. `"10"` sorts before `"9"` under this rule.
    #[serde(rename = "newest")]
    Newest,
}

impl SortKey {
    /// All keys, in the order a sort control lists them.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::PriceLowToHigh,
        Self::PriceHighToLow,
        Self::Rating,
        Self::Newest,
    ];

    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PriceLowToHigh => "price-low",
            Self::PriceHighToLow => "price-high",
            Self::Rating => "rating",
            Self::Newest => "newest",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name (A-Z)",
            Self::PriceLowToHigh => "Price: Low to High",
            Self::PriceHighToLow => "Price: High to Low",
            Self::Rating => "Highest Rated",
            Self::Newest => "Newest First",
        }
    }

    /// Comparator for this key. Ties compare equal so a stable sort keeps
    /// catalog order.
    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Name => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
            Self::PriceLowToHigh => a.price.cmp(&b.price),
            Self::PriceHighToLow => b.price.cmp(&a.price),
            Self::Rating => b.rating.cmp(&a.rating),
            Self::Newest => b.id.cmp(&a.id),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| QueryError::UnknownSortKey(s.to_string()))
    }
}

/// Everything that shapes a catalog view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParameters {
    /// Free-text search over name and description. Empty matches all.
    pub search: String,
    pub category: CategoryFilter,
    pub price_range: PriceRange,
    pub sort: SortKey,
}

impl QueryParameters {
    /// Defaults with a custom price ceiling.
    #[must_use]
    pub fn with_price_ceiling(ceiling: Decimal) -> Self {
        Self {
            price_range: PriceRange::up_to(ceiling),
            ..Self::default()
        }
    }

    /// Whether `product` passes the search, category and price filters.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_needle(product, &self.search.to_lowercase())
    }

    /// [`QueryParameters::matches`] with the search already lowercased.
    fn matches_needle(&self, product: &Product, needle: &str) -> bool {
        matches_search(product, needle)
            && self.category.matches(&product.category)
            && self.price_range.contains(product.price)
    }
}

fn matches_search(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

/// Filter and sort the catalog.
///
/// Pure and deterministic: the same catalog and parameters always yield
/// the same ordering. Products that tie under the sort key keep their
/// catalog order.
#[must_use]
pub fn query<'a>(catalog: &'a Catalog, params: &QueryParameters) -> Vec<&'a Product> {
    let needle = params.search.to_lowercase();

    let mut results: Vec<&Product> = catalog
        .iter()
        .filter(|product| params.matches_needle(product, &needle))
        .collect();

    // `sort_by` is stable.
    results.sort_by(|a, b| params.sort.compare(a, b));
    results
}
