use std::sync::Arc;

use stockroom_core::InventoryResult;
use stockroom_products::Product;

use crate::config::{ConsistencyMode, InventoryConfig};
use crate::priority::MinPriorityQueue;
use crate::queue::RestockQueue;
use crate::store::ProductStore;

fn stock_key(product: &Arc<Product>) -> u32 {
    product.stock()
}

/// In-memory inventory: keyed product store, FIFO restock queue and a
/// low-stock min-heap over the same shared product handles.
///
/// Single-owner and synchronous; all mutation goes through `&mut self`. A
/// concurrent host must wrap the whole value in one lock.
///
/// With the default [`ConsistencyMode::Detached`], removing a product from
/// the store does not remove it from the restock queue or the low-stock
/// heap, so later `process_restock` / `get_low_stock_product` calls can still
/// return it. [`ConsistencyMode::Reconcile`] only hands out entries whose
/// record is still the one stored under their SKU; removed or replaced
/// records are skipped.
#[derive(Debug, Clone)]
pub struct Inventory {
    config: InventoryConfig,
    products: ProductStore,
    restock_queue: RestockQueue,
    low_stock: MinPriorityQueue<Arc<Product>, u32>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::with_config(InventoryConfig::default())
    }

    pub fn with_config(config: InventoryConfig) -> Self {
        let capacity = config.expected_products;
        Self {
            products: ProductStore::with_capacity(capacity),
            restock_queue: RestockQueue::with_capacity(capacity),
            low_stock: MinPriorityQueue::with_capacity(stock_key, capacity),
            config,
        }
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    /// Store a product under its SKU and track it for low-stock retrieval.
    ///
    /// Returns the shared handle now held by the inventory. An existing SKU
    /// fails with `DuplicateKey`; neither container is touched in that case.
    pub fn add_product(&mut self, product: impl Into<Arc<Product>>) -> InventoryResult<Arc<Product>> {
        let product = product.into();
        self.products.insert(Arc::clone(&product))?;
        self.low_stock.push(Arc::clone(&product));

        tracing::debug!(sku = %product.sku(), stock = product.stock(), "product added");
        Ok(product)
    }

    pub fn get_product(&self, sku: &str) -> Option<Arc<Product>> {
        self.products.get(sku).cloned()
    }

    /// Remove a product from the store.
    ///
    /// A missing SKU is logged and ignored. The restock queue and low-stock
    /// heap are not touched.
    pub fn remove_product(&mut self, sku: &str) -> Option<Arc<Product>> {
        match self.products.remove(sku) {
            Some(product) => {
                tracing::debug!(sku, "product removed");
                Some(product)
            }
            None => {
                tracing::warn!(sku, "product not found; nothing removed");
                None
            }
        }
    }

    /// Queue a product for restock. No dedup and no store membership check.
    pub fn enqueue_restock(&mut self, product: impl Into<Arc<Product>>) {
        let product = product.into();
        tracing::debug!(sku = %product.sku(), "queued for restock");
        self.restock_queue.push_back(product);
    }

    /// Take the oldest queued restock entry. Does not change stock levels.
    pub fn process_restock(&mut self) -> Option<Arc<Product>> {
        loop {
            let queued = self.restock_queue.pop_front()?;
            if let Some(product) = self.resolve(&queued) {
                return Some(product);
            }
            tracing::debug!(sku = %queued.sku(), "dropping stale restock entry");
        }
    }

    /// Extract the product with the lowest stock. Equal stock levels come out
    /// in the order the products were added.
    pub fn get_low_stock_product(&mut self) -> Option<Arc<Product>> {
        loop {
            let candidate = self.low_stock.pop()?;
            if let Some(product) = self.resolve(&candidate) {
                return Some(product);
            }
            tracing::debug!(sku = %candidate.sku(), "dropping stale low-stock entry");
        }
    }

    /// Products currently in the store, in insertion order.
    pub fn display_inventory(&self) -> Vec<Arc<Product>> {
        self.products.iter().cloned().collect()
    }

    pub fn peek_restock(&self) -> Option<Arc<Product>> {
        self.restock_queue.iter().find_map(|queued| self.resolve(queued))
    }

    pub fn peek_low_stock_product(&self) -> Option<Arc<Product>> {
        match self.config.consistency {
            ConsistencyMode::Detached => self.low_stock.peek().cloned(),
            ConsistencyMode::Reconcile => self
                .low_stock
                .peek_matching(|candidate| self.is_stored(candidate))
                .cloned(),
        }
    }

    pub fn contains(&self, sku: &str) -> bool {
        self.products.contains(sku)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Raw restock queue length, including entries for removed products.
    pub fn restock_len(&self) -> usize {
        self.restock_queue.len()
    }

    /// Raw low-stock heap size, including entries for removed products.
    pub fn low_stock_len(&self) -> usize {
        self.low_stock.len()
    }

    /// Map a queue/heap entry to what callers should receive.
    ///
    /// Detached: the entry itself. Reconcile: the entry only while it is the
    /// exact record stored under its SKU. A removed SKU, or one re-added with
    /// a new record, makes the old entry stale.
    fn resolve(&self, entry: &Arc<Product>) -> Option<Arc<Product>> {
        match self.config.consistency {
            ConsistencyMode::Detached => Some(Arc::clone(entry)),
            ConsistencyMode::Reconcile if self.is_stored(entry) => Some(Arc::clone(entry)),
            ConsistencyMode::Reconcile => None,
        }
    }

    fn is_stored(&self, entry: &Arc<Product>) -> bool {
        self.products
            .get(entry.sku().as_str())
            .is_some_and(|stored| Arc::ptr_eq(stored, entry))
    }
}
