//! Customer rating on a 0.0–5.0 scale.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// The value is outside `0.0..=5.0`.
    #[error("rating must be between 0 and 5 (got {0})")]
    OutOfRange(Decimal),
}

/// An average review rating.
///
/// Backed by a `Decimal` so ratings have a total order and compare exactly
/// (`4.8 > 4.7` without float surprises).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Rating(Decimal);

impl Rating {
    /// Highest possible rating.
    pub const MAX: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

    /// Create a rating, validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] if `value` is negative or above 5.
    pub fn new(value: Decimal) -> Result<Self, RatingError> {
        if value < Decimal::ZERO || value > Self::MAX {
            return Err(RatingError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl TryFrom<Decimal> for Rating {
    type Error = RatingError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for Decimal {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Rating::new(Decimal::ZERO).is_ok());
        assert!(Rating::new(Decimal::from(5)).is_ok());
        assert!(Rating::new(Decimal::new(51, 1)).is_err());
        assert!(Rating::new(Decimal::new(-1, 1)).is_err());
    }

    #[test]
    fn test_ordering() {
        let high = Rating::new(Decimal::new(48, 1)).unwrap();
        let low = Rating::new(Decimal::new(43, 1)).unwrap();
        assert!(high > low);
    }

    #[test]
    fn test_deserialize_from_json_number() {
        let rating: Rating = serde_json::from_str("4.6").unwrap();
        assert_eq!(rating.value(), Decimal::new(46, 1));
        assert!(serde_json::from_str::<Rating>("7").is_err());
    }

    #[test]
    fn test_display() {
        let rating = Rating::new(Decimal::new(45, 1)).unwrap();
        assert_eq!(rating.to_string(), "4.5");
    }
}
