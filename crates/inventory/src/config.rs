//! Inventory configuration.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use stockroom_core::{InventoryError, InventoryResult};

pub const ENV_CONSISTENCY: &str = "STOCKROOM_CONSISTENCY";
pub const ENV_EXPECTED_PRODUCTS: &str = "STOCKROOM_EXPECTED_PRODUCTS";

/// How the restock queue and low-stock heap relate to the product store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsistencyMode {
    /// Queue and heap keep whatever was put in them. Removing a product from
    /// the store leaves it reachable through both.
    #[default]
    Detached,
    /// Queue and heap entries are resolved through the store when taken out.
    /// Entries whose SKU is no longer stored are dropped and the next one is
    /// tried.
    Reconcile,
}

impl ConsistencyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsistencyMode::Detached => "detached",
            ConsistencyMode::Reconcile => "reconcile",
        }
    }
}

impl FromStr for ConsistencyMode {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detached" => Ok(ConsistencyMode::Detached),
            "reconcile" => Ok(ConsistencyMode::Reconcile),
            other => Err(InventoryError::config(format!(
                "{ENV_CONSISTENCY}: expected `detached` or `reconcile`, got `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub consistency: ConsistencyMode,
    /// Capacity hint for the containers.
    pub expected_products: usize,
}

impl InventoryConfig {
    /// Read configuration from the process environment.
    ///
    /// Unset variables fall back to defaults; set but unparseable ones are errors.
    pub fn from_env() -> InventoryResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> InventoryResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_CONSISTENCY) {
            config.consistency = raw.parse()?;
        }

        if let Some(raw) = lookup(ENV_EXPECTED_PRODUCTS) {
            config.expected_products = raw.trim().parse().map_err(|e| {
                InventoryError::config(format!("{ENV_EXPECTED_PRODUCTS}: {e}"))
            })?;
        }

        Ok(config)
    }
}
