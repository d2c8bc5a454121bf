//! Cart summary for display.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A read-only snapshot of the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Per-line breakdown in cart order.
    pub lines: Vec<LineSummary>,
    /// Number of distinct lines.
    pub line_count: usize,
    /// Total units.
    pub item_count: u64,
    /// Sum of line subtotals.
    pub total: Money,
}

impl CartSummary {
    /// Check if the cart was empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The badge count; `None` hides the badge for an empty cart.
    pub fn badge(&self) -> Option<usize> {
        (self.line_count > 0).then_some(self.line_count)
    }
}

/// One line of a cart summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineSummary {
    /// Product ID.
    pub product_id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// unit_price × quantity.
    pub subtotal: Money,
}

impl LineSummary {
    /// Price line as the cart panel shows it (e.g., "5 000 ₽ × 2").
    pub fn price_label(&self) -> String {
        format!("{} \u{d7} {}", self.unit_price.display(), self.quantity)
    }
}
