//! Core types for Bazaar.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod price;
pub mod product;
pub mod rating;
pub mod theme;

pub use category::{Category, CategoryFilter};
pub use id::{ProductId, ProductIdError};
pub use price::{CurrencyCode, Price, PriceError};
pub use product::{Product, ProductError};
pub use rating::{Rating, RatingError};
pub use theme::Theme;
