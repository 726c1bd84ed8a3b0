//! Keyed product store with insertion-ordered listing.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use stockroom_core::{Entity, InventoryError, InventoryResult, Sku};
use stockroom_products::Product;

/// SKU → product map.
///
/// Lookups and removals are by SKU. `iter()` yields the live products in the
/// order they were inserted; a removed-then-reinserted SKU moves to the end.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    entries: HashMap<Sku, (u64, Arc<Product>)>,
    order: BTreeMap<u64, Sku>,
    next_seq: u64,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            order: BTreeMap::new(),
            next_seq: 0,
        }
    }

    /// Insert a product under its entity id (the SKU).
    ///
    /// Never overwrites: an existing SKU yields `DuplicateKey` and leaves the
    /// store untouched.
    pub fn insert(&mut self, product: Arc<Product>) -> InventoryResult<()> {
        match self.entries.entry(product.id().clone()) {
            Entry::Occupied(existing) => Err(InventoryError::duplicate_key(existing.key().clone())),
            Entry::Vacant(slot) => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.order.insert(seq, slot.key().clone());
                slot.insert((seq, product));
                Ok(())
            }
        }
    }

    pub fn get(&self, sku: &str) -> Option<&Arc<Product>> {
        self.entries.get(sku).map(|(_, product)| product)
    }

    pub fn contains(&self, sku: &str) -> bool {
        self.entries.contains_key(sku)
    }

    pub fn remove(&mut self, sku: &str) -> Option<Arc<Product>> {
        let (seq, product) = self.entries.remove(sku)?;
        self.order.remove(&seq);
        Some(product)
    }

    /// Live products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Product>> + '_ {
        self.order
            .values()
            .filter_map(|sku| self.entries.get(sku).map(|(_, product)| product))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
