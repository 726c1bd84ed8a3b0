//! Products module.
//!
//! The `Product` record tracked by the inventory: identity, price, category
//! and stock on hand. Pure data plus validation (no containers, no IO).

pub mod product;

pub use product::{Product, ProductRecord};
