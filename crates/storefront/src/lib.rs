//! Bazaar storefront library.
//!
//! Catalog browsing plus cart, wishlist and theme stores persisted to a
//! local key-value backend. UI hosts drive it through
//! [`Storefront::dispatch`](state::Storefront::dispatch).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod state;
pub mod storage;
pub mod stores;
pub mod telemetry;

pub use catalog::{Catalog, CatalogBrowser, PriceRange, QueryParameters, SortKey};
pub use config::StorefrontConfig;
pub use error::{Result, StorefrontError};
pub use state::{Storefront, StorefrontEvent, StorefrontSummary};
