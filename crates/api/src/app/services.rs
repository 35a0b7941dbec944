//! Shared application state: catalog, shipping policy, per-session carts.

use std::{
    collections::HashMap,
    sync::Mutex,
};

use closet_cart::Cart;
use closet_catalog::{Product, reference_catalog};
use closet_checkout::ShippingPolicy;
use closet_core::{ProductId, SessionId};

/// Storefront services, shared across handlers via `Extension<Arc<_>>`.
///
/// Carts live in a lock-guarded map keyed by session. The lock is an
/// axum-runtime artifact only: the domain model is single-logical-writer
/// (one shopper per session), so there is never real contention on a cart.
pub struct AppServices {
    catalog: Vec<Product>,
    shipping: ShippingPolicy,
    carts: Mutex<HashMap<SessionId, Cart>>,
}

impl AppServices {
    /// Reference catalog + default shipping policy.
    pub fn new() -> Self {
        Self::with_catalog(reference_catalog(), ShippingPolicy::default())
    }

    pub fn with_catalog(catalog: Vec<Product>, shipping: ShippingPolicy) -> Self {
        Self {
            catalog,
            shipping,
            carts: Mutex::new(HashMap::new()),
        }
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn shipping(&self) -> &ShippingPolicy {
        &self.shipping
    }

    pub fn find_product(&self, id: &ProductId) -> Option<&Product> {
        self.catalog.iter().find(|p| &p.id == id)
    }

    /// Run `f` against the session's cart, creating an empty cart on first
    /// touch.
    pub fn with_cart<R>(&self, session_id: SessionId, f: impl FnOnce(&mut Cart) -> R) -> R {
        let mut carts = self.carts.lock().unwrap();
        f(carts.entry(session_id).or_default())
    }

    /// Run `f` against a read-only view of the session's cart; sessions that
    /// never touched a cart observe an empty one.
    pub fn read_cart<R>(&self, session_id: SessionId, f: impl FnOnce(&Cart) -> R) -> R {
        let carts = self.carts.lock().unwrap();
        match carts.get(&session_id) {
            Some(cart) => f(cart),
            None => f(&Cart::new()),
        }
    }
}

impl Default for AppServices {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use closet_cart::NewLineItem;
    use closet_catalog::Color;
    use closet_core::Money;

    #[test]
    fn carts_are_isolated_per_session() {
        let services = AppServices::new();
        let a = SessionId::new();
        let b = SessionId::new();

        services.with_cart(a, |cart| {
            cart.add_item(NewLineItem {
                product_id: ProductId::new("cuffed-beanie"),
                name: "The Cuffed Beanie".to_string(),
                price: Money::from_rands(399),
                size: "One Size".to_string(),
                color: Color::Black,
                image: "/assets/products/beanie.jpg".to_string(),
            });
        });

        assert_eq!(services.read_cart(a, |c| c.total_items()), 1);
        assert_eq!(services.read_cart(b, |c| c.total_items()), 0);
    }

    #[test]
    fn untouched_session_reads_an_empty_cart() {
        let services = AppServices::new();
        let ghost = SessionId::new();
        assert!(services.read_cart(ghost, |c| c.is_empty()));
    }

    #[test]
    fn find_product_matches_on_id() {
        let services = AppServices::new();
        let id = ProductId::new("structured-blazer");
        assert!(services.find_product(&id).is_some());
        assert!(services.find_product(&ProductId::new("no-such")).is_none());
    }
}
