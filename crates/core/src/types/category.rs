//! Product categories and the category filter.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A product category label, e.g. `"Electronics"`.
///
/// Categories are compared exactly (case-sensitive), matching how the
/// catalog data spells them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Create a category from its label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category selection for catalog queries.
///
/// On the wire the filter is a plain string; the sentinel `"All"` means no
/// category restriction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// Match every category.
    #[default]
    All,
    /// Match only products in this category.
    Only(Category),
}

impl CategoryFilter {
    /// Wire value of the "no filter" sentinel.
    pub const ALL: &'static str = "All";

    /// Returns true if a product in `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == Self::ALL {
            Self::All
        } else {
            Self::Only(Category(value))
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Self::from(value.to_owned())
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.to_string()
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_everything() {
        assert!(CategoryFilter::All.matches(&Category::new("Kitchen")));
    }

    #[test]
    fn test_only_matches_exact_label() {
        let filter = CategoryFilter::from("Electronics");
        assert!(filter.matches(&Category::new("Electronics")));
        assert!(!filter.matches(&Category::new("electronics")));
        assert!(!filter.matches(&Category::new("Home")));
    }

    #[test]
    fn test_sentinel_parses_to_all() {
        assert_eq!(CategoryFilter::from("All"), CategoryFilter::All);
    }

    #[test]
    fn test_serde_uses_plain_strings() {
        let json = serde_json::to_string(&CategoryFilter::All).unwrap();
        assert_eq!(json, "\"All\"");

        let parsed: CategoryFilter = serde_json::from_str("\"Fashion\"").unwrap();
        assert_eq!(parsed, CategoryFilter::Only(Category::new("Fashion")));
    }
}
