//! Environment gate for the store-facing configuration.

use crate::error::CoreError;

/// Region the store client is created in.
pub const DEFAULT_REGION: &str = "DEFAULT_REGION";
/// Parent products table. Not written by this service but part of the
/// deployment's configuration surface.
pub const PRODUCTS_TABLE: &str = "WORDPRESS_PRODUCTS_TABLE_NAME";
/// Target table of every batch statement.
pub const PRODUCT_VARIATIONS_TABLE: &str = "WORDPRESS_PRODUCT_VARIATIONS_TABLE_NAME";

/// Store configuration that must be present before any request is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEnv {
    pub default_region: String,
    pub products_table: String,
    pub product_variations_table: String,
}

impl StoreEnv {
    /// Read the gate values from the process environment.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the gate values through `lookup`, checking them in a fixed order.
    ///
    /// An empty value counts as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(CoreError::MissingConfig(key))
        };

        Ok(Self {
            default_region: required(DEFAULT_REGION)?,
            products_table: required(PRODUCTS_TABLE)?,
            product_variations_table: required(PRODUCT_VARIATIONS_TABLE)?,
        })
    }
}
