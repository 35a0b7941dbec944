//! Checkout flow: shipping policy, order quote, simulated payment.
//!
//! Reads the cart's derived totals, applies the shipping rule, and on a
//! successful simulated payment clears the cart exactly once. No real payment
//! integration — the "gateway" is a deterministic stub.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use closet_cart::Cart;
use closet_core::{DomainError, DomainResult, Money, OrderId, ProductId};

/// Flat-fee shipping, waived at a subtotal threshold.
///
/// Policy values, not business invariants: both are injectable, the defaults
/// match the storefront (R100 fee, free from R1,000).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    pub flat_fee: Money,
    pub free_threshold: Money,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            flat_fee: Money::from_rands(100),
            free_threshold: Money::from_rands(1000),
        }
    }
}

impl ShippingPolicy {
    /// Fee for a given cart subtotal. The threshold is inclusive.
    pub fn fee_for(&self, subtotal: Money) -> Money {
        if subtotal >= self.free_threshold {
            Money::ZERO
        } else {
            self.flat_fee
        }
    }
}

/// One quoted line, denormalized for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub product_id: ProductId,
    pub name: String,
    pub size: String,
    pub quantity: u32,
    pub line_total: Money,
}

/// Order summary shown before payment. All amounts VAT-inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutQuote {
    pub lines: Vec<QuoteLine>,
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
}

/// Proof of a successful simulated payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub order_id: OrderId,
    pub total: Money,
    pub paid_at: DateTime<Utc>,
}

/// Build the order summary for the current cart state.
///
/// Pure read: quoting never mutates the cart. An empty cart quotes to zeros
/// with the flat shipping fee still shown (the UI gates checkout on emptiness;
/// `pay` enforces it).
pub fn quote(cart: &Cart, policy: &ShippingPolicy) -> CheckoutQuote {
    let lines = cart
        .items()
        .iter()
        .map(|item| QuoteLine {
            product_id: item.product_id.clone(),
            name: item.name.clone(),
            size: item.size.clone(),
            quantity: item.quantity,
            line_total: item.line_total(),
        })
        .collect();
    let subtotal = cart.subtotal();
    let shipping = policy.fee_for(subtotal);
    CheckoutQuote {
        lines,
        subtotal,
        shipping,
        total: subtotal.plus(shipping),
    }
}

/// Simulated payment: validates a non-empty cart, mints a receipt, clears the
/// cart.
///
/// The clear is idempotent by the cart's contract, so a retried `pay` after
/// success simply fails validation on the now-empty cart rather than
/// double-charging.
pub fn pay(
    cart: &mut Cart,
    policy: &ShippingPolicy,
    paid_at: DateTime<Utc>,
) -> DomainResult<Receipt> {
    if cart.is_empty() {
        return Err(DomainError::validation("cannot pay for an empty cart"));
    }
    let summary = quote(cart, policy);
    cart.clear();
    Ok(Receipt {
        order_id: OrderId::new(),
        total: summary.total,
        paid_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use closet_cart::NewLineItem;
    use closet_catalog::Color;

    fn add(cart: &mut Cart, id: &str, rands: u64) {
        cart.add_item(NewLineItem {
            product_id: ProductId::new(id),
            name: id.to_string(),
            price: Money::from_rands(rands),
            size: "M".to_string(),
            color: Color::Black,
            image: format!("/assets/products/{id}.jpg"),
        });
    }

    #[test]
    fn shipping_is_flat_below_the_threshold() {
        let policy = ShippingPolicy::default();
        assert_eq!(policy.fee_for(Money::from_rands(999)), Money::from_rands(100));
        assert_eq!(policy.fee_for(Money::ZERO), Money::from_rands(100));
    }

    #[test]
    fn shipping_is_waived_at_and_above_the_threshold() {
        let policy = ShippingPolicy::default();
        assert_eq!(policy.fee_for(Money::from_rands(1000)), Money::ZERO);
        assert_eq!(policy.fee_for(Money::from_rands(1899)), Money::ZERO);
    }

    #[test]
    fn quote_sums_subtotal_shipping_and_total() {
        let mut cart = Cart::new();
        add(&mut cart, "cuffed-beanie", 399);
        let q = quote(&cart, &ShippingPolicy::default());
        assert_eq!(q.lines.len(), 1);
        assert_eq!(q.subtotal, Money::from_rands(399));
        assert_eq!(q.shipping, Money::from_rands(100));
        assert_eq!(q.total, Money::from_rands(499));
    }

    #[test]
    fn quote_does_not_mutate_the_cart() {
        let mut cart = Cart::new();
        add(&mut cart, "cuffed-beanie", 399);
        let before = cart.clone();
        let _ = quote(&cart, &ShippingPolicy::default());
        assert_eq!(cart, before);
    }

    #[test]
    fn pay_clears_the_cart_and_mints_a_receipt() {
        let mut cart = Cart::new();
        add(&mut cart, "structured-blazer", 1899);
        let receipt = pay(&mut cart, &ShippingPolicy::default(), Utc::now()).unwrap();
        assert_eq!(receipt.total, Money::from_rands(1899)); // free shipping
        assert!(cart.is_empty());
    }

    #[test]
    fn pay_rejects_an_empty_cart() {
        let mut cart = Cart::new();
        let err = pay(&mut cart, &ShippingPolicy::default(), Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn retried_pay_after_success_fails_instead_of_double_charging() {
        let mut cart = Cart::new();
        add(&mut cart, "cuffed-beanie", 399);
        let policy = ShippingPolicy::default();
        assert!(pay(&mut cart, &policy, Utc::now()).is_ok());
        assert!(pay(&mut cart, &policy, Utc::now()).is_err());
        assert!(cart.is_empty());
    }
}
