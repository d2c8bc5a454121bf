//! Cart and cart line types.

use crate::cart::{CartSummary, LineSummary};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;
use std::sync::Arc;

/// An in-memory shopping cart.
///
/// Holds at most one line per product, in the order products were first
/// added. Lines share the catalog's product records.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct Cart {
    /// Lines in the cart.
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line for the product, or appends a new line
    /// with quantity 1. Returns the line's new quantity.
    pub fn add(&mut self, product: Arc<Product>) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
            tracing::debug!(
                product_id = %product.id,
                quantity = line.quantity,
                "cart line incremented"
            );
            return line.quantity;
        }

        tracing::debug!(product_id = %product.id, "cart line added");
        self.lines.push(CartLine {
            product,
            quantity: 1,
        });
        1
    }

    /// Remove the whole line for a product.
    ///
    /// Returns `false` and leaves the cart untouched if the product is absent.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.product.id != product_id);
        let removed = self.lines.len() < len_before;
        if removed {
            tracing::debug!(%product_id, "cart line removed");
        }
        removed
    }

    /// Sum of price × quantity over all lines; zero when empty.
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, line| acc.saturating_add(&line.subtotal()))
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn get_line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product.id == product_id)
    }

    /// Quantity of a product in the cart (0 if absent).
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.get_line(product_id).map_or(0, |l| l.quantity)
    }

    /// Number of distinct lines (what the cart badge shows).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Snapshot the cart for display.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self
                .lines
                .iter()
                .map(|line| LineSummary {
                    product_id: line.product.id.clone(),
                    name: line.product.name.clone(),
                    unit_price: line.product.price,
                    quantity: line.quantity,
                    subtotal: line.subtotal(),
                })
                .collect(),
            line_count: self.line_count(),
            item_count: self.item_count(),
            total: self.total(),
        }
    }
}

/// One product's accumulated quantity in the cart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartLine {
    /// The catalog product, shared with the catalog.
    pub product: Arc<Product>,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Price × quantity for this line.
    pub fn subtotal(&self) -> Money {
        self.product.price.times(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn product(id: &str, price: u64) -> Arc<Product> {
        Arc::new(Product::new(id, format!("Product {id}"), Money::rub(price), Category::Male))
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::rub(0));
    }

    #[test]
    fn test_add_same_product_increments() {
        let mut cart = Cart::new();
        let p = product("m1", 5000);

        assert_eq!(cart.add(p.clone()), 1);
        assert_eq!(cart.add(p.clone()), 2);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of(&p.id), 2);
        assert_eq!(cart.total().amount, 10_000);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(product("b", 1));
        cart.add(product("a", 1));
        cart.add(product("b", 1));

        let ids: Vec<_> = cart.lines().iter().map(|l| l.product.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_line_shares_product() {
        let mut cart = Cart::new();
        let p = product("m1", 5000);
        cart.add(p.clone());
        assert!(Arc::ptr_eq(&cart.lines()[0].product, &p));
    }

    #[test]
    fn test_remove_deletes_whole_line() {
        let mut cart = Cart::new();
        let p = product("m1", 5000);
        cart.add(p.clone());
        cart.add(p.clone());
        cart.add(p.clone());

        assert!(cart.remove(&p.id));
        assert!(cart.is_empty());
        assert_eq!(cart.total().amount, 0);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(product("m1", 5000));
        let before = cart.clone();

        assert!(!cart.remove(&ProductId::new("w1")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_total_mixed_lines() {
        let mut cart = Cart::new();
        cart.add(product("a", 2000));
        cart.add(product("a", 2000));
        cart.add(product("b", 500));
        assert_eq!(cart.total().amount, 4500);
    }

    #[test]
    fn test_summary() {
        let mut cart = Cart::new();
        cart.add(product("a", 2000));
        cart.add(product("a", 2000));
        cart.add(product("b", 500));

        let summary = cart.summary();
        assert_eq!(summary.line_count, 2);
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.lines[0].subtotal.amount, 4000);
        assert_eq!(summary.total.amount, 4500);
    }
}
