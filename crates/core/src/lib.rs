//! `stockroom-core` — shared inventory building blocks.
//!
//! Identifiers, the error model and the entity marker trait. No containers
//! and no IO live here.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{InventoryError, InventoryResult};
pub use id::Sku;
