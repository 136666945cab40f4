//! Integration test fixtures for Bazaar.
//!
//! Tests run the storefront against real file-backed storage in a
//! temporary directory, reopening it to observe what persisted.
//!
//! ```bash
//! cargo test -p bazaar-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use bazaar_core::ProductId;
use bazaar_storefront::{Storefront, StorefrontConfig, StorefrontError};
use tempfile::TempDir;

/// A storefront session rooted in its own temporary storage directory.
///
/// The directory lives as long as the context, so a test can drop one
/// [`Storefront`] and [`TestContext::reopen`] another over the same state.
pub struct TestContext {
    dir: TempDir,
    pub config: StorefrontConfig,
}

impl TestContext {
    /// Create a context with default settings and empty storage.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the temporary directory cannot be created.
    pub fn new() -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let config = StorefrontConfig {
            storage_dir: dir.path().join("storage"),
            ..StorefrontConfig::default()
        };
        Ok(Self { dir, config })
    }

    /// Root of the temporary directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Open a storefront over this context's storage.
    ///
    /// # Errors
    ///
    /// Returns whatever [`Storefront::open`] returns.
    pub fn reopen(&self) -> Result<Storefront, StorefrontError> {
        Storefront::open(&self.config)
    }

    /// Raw persisted value for a storage key, if any.
    #[must_use]
    pub fn stored(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.config.storage_dir.join(key)).ok()
    }

    /// Overwrite a storage key before the next [`TestContext::reopen`].
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn seed(&self, key: &str, value: &str) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.config.storage_dir)?;
        std::fs::write(self.config.storage_dir.join(key), value)
    }
}

/// Parse a product id literal.
///
/// # Panics
///
/// Panics if `raw` is not a valid id; fixtures only pass literals.
#[must_use]
pub fn pid(raw: &str) -> ProductId {
    ProductId::parse(raw).expect("valid product id literal")
}

/// Parse a stored JSON value for assertions.
#[must_use]
pub fn stored_json(raw: Option<String>) -> Option<serde_json::Value> {
    raw.and_then(|raw| serde_json::from_str(&raw).ok())
}
