use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, InventoryError, InventoryResult, Sku};

/// Unvalidated wire shape of a product.
///
/// `Product` (de)serializes through this record, and deserialization goes
/// through `Product::new`, so invalid input is rejected the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub sku: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
}

/// A product held in inventory.
///
/// Immutable once built. Identity is the SKU alone; for low-stock priority
/// products are ranked only by `stock`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    sku: Sku,
    price: f64,
    category: String,
    stock: u32,
}

impl Product {
    /// Build a validated product.
    ///
    /// Rejects a blank SKU and a negative or non-finite price.
    pub fn new(
        sku: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        stock: u32,
    ) -> InventoryResult<Self> {
        let sku = Sku::parse(sku)?;

        if !price.is_finite() {
            return Err(InventoryError::validation("price must be a finite number"));
        }
        if price < 0.0 {
            return Err(InventoryError::validation("price cannot be negative"));
        }

        Ok(Self {
            sku,
            price,
            category: category.into(),
            stock,
        })
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }
}

impl Entity for Product {
    type Id = Sku;

    fn id(&self) -> &Self::Id {
        &self.sku
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Product(SKU: {}, Price: {:?}, Category: {}, Stock: {})",
            self.sku, self.price, self.category, self.stock
        )
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = InventoryError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(record.sku, record.price, record.category, record.stock)
    }
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        Self {
            sku: product.sku.as_str().to_string(),
            price: product.price,
            category: product.category,
            stock: product.stock,
        }
    }
}
