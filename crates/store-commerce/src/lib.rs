//! Storefront domain types and logic for the Exclusive Store.
//!
//! This crate provides the non-presentational core of the storefront page:
//!
//! - **Catalog**: the fixed seed catalog of products and their categories
//! - **Search**: filter state, sort options and the filter/sort pipeline
//! - **Cart**: the in-memory cart ledger and its display summary
//! - **Storefront**: a session joining the three, driven by user actions
//!
//! # Example
//!
//! ```rust
//! use store_commerce::prelude::*;
//!
//! let mut store = Storefront::new();
//! store.set_search("футболка");
//!
//! let results = store.products();
//! assert_eq!(results.len(), 4);
//!
//! let first = results.items[0].id.clone();
//! store.add_to_cart(&first).unwrap();
//! store.add_to_cart(&first).unwrap();
//! assert_eq!(store.cart().total().amount, 10_000);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;
pub mod storefront;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartSummary, LineSummary};

    // Search
    pub use crate::search::{FilterResults, FilterState, PriceBounds, PriceRange, SortOption};

    pub use crate::storefront::Storefront;
}
