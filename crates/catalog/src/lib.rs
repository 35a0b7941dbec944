//! Catalog domain module.
//!
//! This crate contains the product catalog and the filter engine, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod data;
pub mod filter;
pub mod product;

pub use data::{category_options, color_options, reference_catalog, size_options};
pub use filter::{FilterSelection, filter_products};
pub use product::{Color, Product};
