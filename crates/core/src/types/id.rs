//! Product identifiers.
//!
//! Catalog identifiers are opaque strings (`"1"`, `"sku-42"`). Ordering is
//! plain lexicographic byte order, which the catalog's newest-first sort
//! relies on.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ProductId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductIdError {
    /// The input string is empty or only whitespace.
    #[error("product id cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("product id must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A type-safe product identifier.
///
/// Serializes as a bare JSON string. Deserialization runs the same
/// validation as [`ProductId::parse`], so persisted data with empty ids is
/// rejected at the boundary.
///
/// ## Examples
///
/// ```
/// use bazaar_core::ProductId;
///
/// let id = ProductId::parse("8").unwrap();
/// assert_eq!(id.as_str(), "8");
/// assert!(ProductId::parse("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Maximum length of a product identifier.
    pub const MAX_LENGTH: usize = 128;

    /// Parse a `ProductId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is blank or longer than
    /// [`Self::MAX_LENGTH`].
    pub fn parse(s: &str) -> Result<Self, ProductIdError> {
        if s.trim().is_empty() {
            return Err(ProductIdError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(ProductIdError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = ProductIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ProductId {
    type Error = ProductIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_ids() {
        assert!(ProductId::parse("1").is_ok());
        assert!(ProductId::parse("sku-42").is_ok());
        assert!(ProductId::parse("a".repeat(128).as_str()).is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(ProductId::parse(""), Err(ProductIdError::Empty));
        assert_eq!(ProductId::parse("   "), Err(ProductIdError::Empty));
    }

    #[test]
    fn test_parse_too_long() {
        assert!(matches!(
            ProductId::parse(&"a".repeat(129)),
            Err(ProductIdError::TooLong { max: 128 })
        ));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let two = ProductId::parse("2").unwrap();
        let ten = ProductId::parse("10").unwrap();
        // "10" < "2" byte-wise; newest-first sorting depends on this.
        assert!(ten < two);
    }

    #[test]
    fn test_serde_is_bare_string() {
        let id = ProductId::parse("7").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"7\"");

        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        assert!(serde_json::from_str::<ProductId>("\"\"").is_err());
    }

    #[test]
    fn test_display() {
        let id = ProductId::parse("sku-1").unwrap();
        assert_eq!(format!("{id}"), "sku-1");
    }
}
