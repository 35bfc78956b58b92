//! # Domain Types
//!
//! Core domain types the console shell consumes.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                            │
//! │                                                                 │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌───────────────┐  │
//! │  │    Product      │   │     Order       │   │ PaymentMethod │  │
//! │  │  ─────────────  │   │  ─────────────  │   │ ───────────── │  │
//! │  │  id (u32)       │   │  id (u32)       │   │  Cash         │  │
//! │  │  description    │   │  placed_on      │   │  Term         │  │
//! │  │  price_cents    │   │  payment_method │   └───────────────┘  │
//! │  └─────────────────┘   │  products (≤10) │                      │
//! │                        └─────────────────┘                      │
//! │                                                                 │
//! │  Products come from the catalog file; Orders are built at the   │
//! │  counter and travel through the order Queue.                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::MAX_ORDER_PRODUCTS;

// =============================================================================
// Product
// =============================================================================

/// A catalog entry available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier (from the catalog file).
    pub id: u32,

    /// Display name shown to the operator and on order tickets.
    pub description: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Case-insensitive description match, used by catalog lookups and the
    /// product-containment report.
    pub fn matches_description(&self, description: &str) -> bool {
        self.description.eq_ignore_ascii_case(description.trim())
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How an order is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Paid in full at the counter. Earns the cash discount.
    Cash,
    /// Paid in installments (on term). Full price.
    Term,
}

/// Discount applied to cash orders, in basis points (1000 = 10%).
pub const CASH_DISCOUNT_BPS: u32 = 1000;

// =============================================================================
// Order
// =============================================================================

/// An order being assembled at the counter, or waiting in the processing
/// queue once finalized.
///
/// ## Invariants
/// - Holds at most [`MAX_ORDER_PRODUCTS`] products
/// - Products are append-only; an order is never edited after finalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Sequential order number, assigned by the shell.
    pub id: u32,

    /// The date the order was placed.
    pub placed_on: NaiveDate,

    /// How the customer pays.
    pub payment_method: PaymentMethod,

    /// Products on the ticket. Bounded; kept private so the bound holds.
    products: Vec<Product>,
}

impl Order {
    /// Creates a new empty order.
    pub fn new(id: u32, placed_on: NaiveDate, payment_method: PaymentMethod) -> Self {
        Order {
            id,
            placed_on,
            payment_method,
            products: Vec::new(),
        }
    }

    /// Adds a product to the ticket.
    ///
    /// ## Errors
    /// [`CoreError::OrderFull`] once the ticket holds
    /// [`MAX_ORDER_PRODUCTS`] products.
    pub fn add_product(&mut self, product: Product) -> CoreResult<()> {
        if self.products.len() >= MAX_ORDER_PRODUCTS {
            return Err(CoreError::OrderFull {
                max: MAX_ORDER_PRODUCTS,
            });
        }
        self.products.push(product);
        Ok(())
    }

    /// Products on the ticket, in the order they were added.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products on the ticket.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// The amount the customer pays.
    ///
    /// Sum of product prices; cash orders get the
    /// [`CASH_DISCOUNT_BPS`] discount, term orders pay full price.
    pub fn final_value(&self) -> Money {
        let mut subtotal = Money::zero();
        for product in &self.products {
            subtotal += product.price();
        }

        match self.payment_method {
            PaymentMethod::Cash => subtotal.apply_percentage_discount(CASH_DISCOUNT_BPS),
            PaymentMethod::Term => subtotal,
        }
    }

    /// True iff any product on the ticket matches `description`
    /// (case-insensitive). Backs the product-containment report.
    pub fn contains_product(&self, description: &str) -> bool {
        self.products
            .iter()
            .any(|p| p.matches_description(description))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: u32, price_cents: i64) -> Product {
        Product {
            id,
            description: format!("Product {}", id),
            price_cents,
        }
    }

    fn test_order(payment_method: PaymentMethod) -> Order {
        let placed_on = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
        Order::new(1, placed_on, payment_method)
    }

    #[test]
    fn test_add_product_up_to_limit() {
        let mut order = test_order(PaymentMethod::Term);
        for n in 0..MAX_ORDER_PRODUCTS {
            order.add_product(test_product(n as u32, 100)).unwrap();
        }
        assert_eq!(order.product_count(), MAX_ORDER_PRODUCTS);

        let err = order.add_product(test_product(99, 100)).unwrap_err();
        assert_eq!(
            err,
            CoreError::OrderFull {
                max: MAX_ORDER_PRODUCTS,
            }
        );
        // The rejected product was not added.
        assert_eq!(order.product_count(), MAX_ORDER_PRODUCTS);
    }

    #[test]
    fn test_final_value_term_is_plain_sum() {
        let mut order = test_order(PaymentMethod::Term);
        order.add_product(test_product(1, 1099)).unwrap();
        order.add_product(test_product(2, 500)).unwrap();
        assert_eq!(order.final_value(), Money::from_cents(1599));
    }

    #[test]
    fn test_final_value_cash_gets_discount() {
        let mut order = test_order(PaymentMethod::Cash);
        order.add_product(test_product(1, 5000)).unwrap();
        order.add_product(test_product(2, 5000)).unwrap();
        // $100.00 - 10% = $90.00
        assert_eq!(order.final_value(), Money::from_cents(9000));
    }

    #[test]
    fn test_final_value_empty_order_is_zero() {
        let order = test_order(PaymentMethod::Cash);
        assert!(order.final_value().is_zero());
    }

    #[test]
    fn test_contains_product_is_case_insensitive() {
        let mut order = test_order(PaymentMethod::Term);
        order
            .add_product(Product {
                id: 1,
                description: "Espresso Beans".to_string(),
                price_cents: 1250,
            })
            .unwrap();

        assert!(order.contains_product("espresso beans"));
        assert!(order.contains_product("  ESPRESSO BEANS  "));
        assert!(!order.contains_product("espresso"));
    }
}
