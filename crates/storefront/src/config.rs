//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `BAZAAR_STORAGE_DIR` - Directory for persisted cart/wishlist/theme (default: .bazaar)
//! - `BAZAAR_CATALOG_PATH` - JSON catalog file (default: bundled demo catalog)
//! - `BAZAAR_PRICE_CEILING` - Upper bound of the default price filter (default: 1000)
//! - `BAZAAR_CURRENCY` - ISO 4217 store currency (default: USD)

use std::path::PathBuf;
use std::str::FromStr;

use bazaar_core::CurrencyCode;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::catalog::DEFAULT_PRICE_CEILING;

const DEFAULT_STORAGE_DIR: &str = ".bazaar";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory backing durable local storage
    pub storage_dir: PathBuf,
    /// Catalog file; `None` uses the bundled catalog
    pub catalog_path: Option<PathBuf>,
    /// Upper bound of the default price filter
    pub price_ceiling: Decimal,
    /// Currency used for totals and display
    pub currency_code: CurrencyCode,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            catalog_path: None,
            price_ceiling: DEFAULT_PRICE_CEILING,
            currency_code: CurrencyCode::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage_dir = lookup("BAZAAR_STORAGE_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR), PathBuf::from);
        let catalog_path = lookup("BAZAAR_CATALOG_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let price_ceiling = parse_or_default(&lookup, "BAZAAR_PRICE_CEILING", DEFAULT_PRICE_CEILING)?;
        if price_ceiling < Decimal::ZERO {
            return Err(ConfigError::InvalidEnvVar(
                "BAZAAR_PRICE_CEILING".to_string(),
                format!("must not be negative (got {price_ceiling})"),
            ));
        }
        let currency_code = parse_or_default(&lookup, "BAZAAR_CURRENCY", CurrencyCode::default())?;

        Ok(Self {
            storage_dir,
            catalog_path,
            price_ceiling,
            currency_code,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an optional variable, falling back to `default` when unset.
fn parse_or_default<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}
