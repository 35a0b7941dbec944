//! Catalog filter engine.
//!
//! Pure function over the catalog: AND across dimensions, OR within a
//! dimension, stable output order. Recomputed on every selection change; no
//! caching, no side effects.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use closet_core::ValueObject;

use crate::product::{Color, Product};

/// Active filter selections, one independent set per dimension.
///
/// An empty set in a dimension means "no constraint on that dimension".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub categories: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
    pub colors: BTreeSet<Color>,
}

impl FilterSelection {
    /// No constraints at all: every product matches.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.sizes.is_empty() && self.colors.is_empty()
    }

    /// Whether `product` satisfies every dimension with a non-empty set.
    ///
    /// Within a dimension any overlap suffices (OR); across dimensions all
    /// constrained ones must hold (AND).
    pub fn matches(&self, product: &Product) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }
        if !self.sizes.is_empty() && !product.sizes.iter().any(|s| self.sizes.contains(s)) {
            return false;
        }
        if !self.colors.is_empty() && !product.colors.iter().any(|c| self.colors.contains(c)) {
            return false;
        }
        true
    }
}

impl ValueObject for FilterSelection {}

/// Filter the catalog down to the products matching `selection`.
///
/// Stable: survivors keep their relative order from `catalog`. An empty
/// catalog or a selection matching nothing yields an empty result; neither is
/// an error state.
pub fn filter_products<'a>(catalog: &'a [Product], selection: &FilterSelection) -> Vec<&'a Product> {
    catalog.iter().filter(|p| selection.matches(p)).collect()
}
