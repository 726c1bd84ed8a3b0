//! Inventory error model.

use thiserror::Error;

use crate::id::Sku;

/// Result type used across the inventory crates.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Only hard failures live here. Lookups that miss, and dequeues or
/// extractions from an empty container, are expected outcomes and are
/// returned as `Option::None` instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A product with this SKU is already stored.
    #[error("SKU already exists: {sku}")]
    DuplicateKey { sku: Sku },

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Configuration could not be read or parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl InventoryError {
    pub fn duplicate_key(sku: impl Into<Sku>) -> Self {
        Self::DuplicateKey { sku: sku.into() }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_key_message_names_the_sku() {
        let err = InventoryError::duplicate_key("A100");
        assert_eq!(err.to_string(), "SKU already exists: A100");
    }

    #[test]
    fn validation_and_config_messages() {
        assert_eq!(
            InventoryError::validation("price cannot be negative").to_string(),
            "validation failed: price cannot be negative"
        );
        assert_eq!(
            InventoryError::config("bad mode").to_string(),
            "invalid configuration: bad mode"
        );
    }
}
