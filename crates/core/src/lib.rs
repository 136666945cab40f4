//! Bazaar Core - Shared domain types.
//!
//! This crate provides the types shared by every Bazaar component:
//! - `storefront` - Catalog queries, cart, wishlist and preference stores
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no storage
//! access, no logging. This keeps it lightweight and allows it to be used
//! anywhere, including by host UIs that only render data.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices, ratings,
//!   categories, products and the theme preference

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
