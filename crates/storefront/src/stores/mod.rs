//! Domain state stores.
//!
//! Each store owns its collection exclusively, persists it under a fixed
//! storage key on every mutation, and reloads it on construction. No store
//! operation returns an error: bad arguments are no-ops and storage
//! failures are logged.

mod cart;
mod theme;
mod wishlist;

pub use cart::{CartEntry, CartLine, CartStore};
pub use theme::ThemeStore;
pub use wishlist::WishlistStore;
