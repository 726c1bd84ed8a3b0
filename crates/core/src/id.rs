//! Strongly-typed identifiers used across the inventory.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Stock-keeping unit: the unique identifier of a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    /// Create a SKU, rejecting empty or whitespace-only values.
    pub fn parse(value: impl Into<String>) -> Result<Self, InventoryError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(InventoryError::validation("SKU cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::borrow::Borrow<str> for Sku {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Sku {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Unchecked conversions; validation happens in `Sku::parse` / `FromStr`.
impl From<&str> for Sku {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Sku {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl FromStr for Sku {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
