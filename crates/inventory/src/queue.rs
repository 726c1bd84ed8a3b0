//! FIFO restock queue.

use std::collections::VecDeque;
use std::sync::Arc;

use stockroom_products::Product;

/// Products awaiting restock, served first-in first-out.
///
/// No dedup and no membership check against the product store: the same
/// product may be queued any number of times.
#[derive(Debug, Clone, Default)]
pub struct RestockQueue {
    items: VecDeque<Arc<Product>>,
}

impl RestockQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push_back(&mut self, product: Arc<Product>) {
        self.items.push_back(product);
    }

    pub fn pop_front(&mut self) -> Option<Arc<Product>> {
        self.items.pop_front()
    }

    pub fn front(&self) -> Option<&Arc<Product>> {
        self.items.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Product>> + '_ {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(sku: &str) -> Arc<Product> {
        Arc::new(Product::new(sku, 1.0, "Test", 1).unwrap())
    }

    #[test]
    fn serves_in_arrival_order() {
        let mut queue = RestockQueue::new();
        queue.push_back(product("P1"));
        queue.push_back(product("P2"));

        assert_eq!(queue.front().unwrap().sku().as_str(), "P1");
        assert_eq!(queue.pop_front().unwrap().sku().as_str(), "P1");
        assert_eq!(queue.pop_front().unwrap().sku().as_str(), "P2");
        assert!(queue.pop_front().is_none());
    }

    #[test]
    fn same_product_can_be_queued_twice() {
        let mut queue = RestockQueue::with_capacity(2);
        let p = product("P1");
        queue.push_back(p.clone());
        queue.push_back(p.clone());

        assert_eq!(queue.len(), 2);
        assert!(Arc::ptr_eq(&queue.pop_front().unwrap(), &p));
        assert!(Arc::ptr_eq(&queue.pop_front().unwrap(), &p));
        assert!(queue.is_empty());
    }
}
