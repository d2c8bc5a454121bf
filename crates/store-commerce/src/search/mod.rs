//! Search module.
//!
//! Contains the filter state, sort options and the filter/sort pipeline.

mod filter;
mod query;
mod results;

pub use filter::{
    FilterState, PriceBounds, PriceRange, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE,
    DEFAULT_PRICE_STEP,
};
pub use query::{compare_names, filter_products, SortOption};
pub use results::FilterResults;
