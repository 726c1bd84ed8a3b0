//! Inventory module.
//!
//! In-memory inventory tracking built from three containers over shared
//! product handles: a keyed store, a FIFO restock queue and a low-stock
//! min-heap. Deterministic and synchronous (no IO, no background work).

pub mod config;
pub mod inventory;
pub mod priority;
pub mod queue;
pub mod store;

pub use config::{ConsistencyMode, InventoryConfig};
pub use inventory::Inventory;
pub use priority::MinPriorityQueue;
pub use queue::RestockQueue;
pub use store::ProductStore;
