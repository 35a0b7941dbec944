//! Cart domain module.
//!
//! The canonical in-memory shopping cart: line items merged by
//! (product, size, color) key, derived totals, and the transient panel flag.
//! Pure deterministic domain logic — no IO, no HTTP, no storage.

pub mod cart;

pub use cart::{Cart, LineItem, LineKey, NewLineItem};
