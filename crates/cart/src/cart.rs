use serde::{Deserialize, Serialize};

use closet_catalog::Color;
use closet_core::{Money, ProductId, ValueObject};

/// Identity key of a cart line: a specific product variant.
///
/// Compared by struct equality. The key is deliberately a proper composite
/// value rather than a delimiter-joined string, so field contents can never
/// collide with a separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    pub product_id: ProductId,
    pub size: String,
    pub color: Color,
}

impl ValueObject for LineKey {}

/// One cart row: a product variant and its quantity.
///
/// Name, price and image are denormalized at add-time and stay authoritative
/// for the life of the line — a later catalog price change never retroactively
/// alters items already in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    /// Unit price frozen at add-time.
    pub price: Money,
    pub size: String,
    pub color: Color,
    pub image: String,
    /// Always >= 1; a quantity driven to zero removes the line instead.
    pub quantity: u32,
}

impl LineItem {
    pub fn key(&self) -> LineKey {
        LineKey {
            product_id: self.product_id.clone(),
            size: self.size.clone(),
            color: self.color,
        }
    }

    fn matches(&self, key: &LineKey) -> bool {
        self.product_id == key.product_id && self.size == key.size && self.color == key.color
    }

    /// Line total: frozen unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

/// Candidate for [`Cart::add_item`]: a line item without a quantity yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLineItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: Money,
    pub size: String,
    pub color: Color,
    pub image: String,
}

/// The cart aggregate.
///
/// An owned instance, constructor-injected into whatever surface needs it —
/// never a process-wide singleton. Line items keep insertion order (stable for
/// display; irrelevant to correctness). All operations are total functions:
/// not-found keys are silent no-ops, never faults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
    /// Transient UI state: whether the cart panel is showing.
    is_open: bool,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Merge-or-insert.
    ///
    /// If a line with the candidate's key exists, its quantity goes up by
    /// exactly 1 and the stored name/price/image stay authoritative (any
    /// differing denormalized fields on the candidate are ignored). Otherwise
    /// a new line is appended with quantity 1.
    pub fn add_item(&mut self, candidate: NewLineItem) {
        let key = LineKey {
            product_id: candidate.product_id.clone(),
            size: candidate.size.clone(),
            color: candidate.color,
        };
        if let Some(existing) = self.items.iter_mut().find(|i| i.matches(&key)) {
            existing.quantity = existing.quantity.saturating_add(1);
            return;
        }
        self.items.push(LineItem {
            product_id: candidate.product_id,
            name: candidate.name,
            price: candidate.price,
            size: candidate.size,
            color: candidate.color,
            image: candidate.image,
            quantity: 1,
        });
    }

    /// Delete the line with this exact key. No-op if absent.
    pub fn remove_item(&mut self, key: &LineKey) {
        self.items.retain(|i| !i.matches(key));
    }

    /// Absolute quantity set (not a delta).
    ///
    /// A quantity of zero or below removes the line entirely — the cart never
    /// stores a non-positive quantity. No-op if the key is absent: an update
    /// never materializes a new line.
    pub fn update_quantity(&mut self, key: &LineKey, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(key);
            return;
        }
        if let Some(existing) = self.items.iter_mut().find(|i| i.matches(key)) {
            existing.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Empty the cart unconditionally. Idempotent.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of quantities across all lines; 0 for an empty cart.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of frozen line totals; exact integer arithmetic on cents.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }
}
