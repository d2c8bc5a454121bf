//! Shopping cart module.
//!
//! Contains the cart ledger and its display summary.

mod cart;
mod pricing;

pub use cart::{Cart, CartLine};
pub use pricing::{CartSummary, LineSummary};
