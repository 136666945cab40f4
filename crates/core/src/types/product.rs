//! Catalog product records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Category, CurrencyCode, Price, ProductId, Rating};

/// Errors raised when a product record fails validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// The product has a blank name.
    #[error("product {0} has an empty name")]
    EmptyName(ProductId),
    /// The product price is below zero.
    #[error("product {id} has a negative price ({price})")]
    NegativePrice {
        /// Offending product.
        id: ProductId,
        /// The rejected price.
        price: Decimal,
    },
}

/// A product in the static catalog.
///
/// Products are loaded once at startup and never mutated. The serialized
/// form uses the catalog file's field names (`image`, `reviews`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Unit price in the store currency.
    pub price: Decimal,
    pub category: Category,
    pub stock: u32,
    pub rating: Rating,
    #[serde(rename = "reviews")]
    pub review_count: u32,
    #[serde(rename = "image")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl Product {
    /// Check the invariants the type system does not already enforce.
    ///
    /// # Errors
    ///
    /// Returns a [`ProductError`] for a blank name or a negative price.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::EmptyName(self.id.clone()));
        }
        if self.price < Decimal::ZERO {
            return Err(ProductError::NegativePrice {
                id: self.id.clone(),
                price: self.price,
            });
        }
        Ok(())
    }

    /// Whether at least one unit is available.
    #[must_use]
    pub const fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Unit price tagged with a currency.
    #[must_use]
    pub const fn unit_price(&self, currency_code: CurrencyCode) -> Price {
        Price::new(self.price, currency_code)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SPEAKER: &str = r#"{
        "id": "8",
        "name": "Wireless Bluetooth Speaker",
        "description": "Portable Bluetooth speaker with exceptional sound quality.",
        "price": 89.99,
        "image": "https://example.test/speaker.jpeg",
        "category": "Electronics",
        "stock": 45,
        "rating": 4.3,
        "reviews": 134,
        "features": ["Wireless", "Portable"]
    }"#;

    #[test]
    fn test_deserialize_catalog_record() {
        let product: Product = serde_json::from_str(SPEAKER).unwrap();
        assert_eq!(product.id.as_str(), "8");
        assert_eq!(product.price, Decimal::new(8999, 2));
        assert_eq!(product.category, Category::new("Electronics"));
        assert_eq!(product.review_count, 134);
        assert_eq!(product.features.len(), 2);
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_features_are_optional() {
        let json = SPEAKER.replace(r#""features": ["Wireless", "Portable"]"#, r#""stock2": 0"#);
        let product: Product = serde_json::from_str(&json).unwrap();
        assert!(product.features.is_empty());
    }

    #[test]
    fn test_validate_negative_price() {
        let mut product: Product = serde_json::from_str(SPEAKER).unwrap();
        product.price = Decimal::new(-100, 2);
        assert!(matches!(
            product.validate(),
            Err(ProductError::NegativePrice { .. })
        ));
    }

    #[test]
    fn test_validate_empty_name() {
        let mut product: Product = serde_json::from_str(SPEAKER).unwrap();
        product.name = "  ".to_string();
        assert!(matches!(product.validate(), Err(ProductError::EmptyName(_))));
    }

    #[test]
    fn test_is_in_stock() {
        let mut product: Product = serde_json::from_str(SPEAKER).unwrap();
        assert!(product.is_in_stock());
        product.stock = 0;
        assert!(!product.is_in_stock());
    }

    #[test]
    fn test_unit_price() {
        let product: Product = serde_json::from_str(SPEAKER).unwrap();
        assert_eq!(product.unit_price(CurrencyCode::USD).display(), "$89.99");
    }
}
