//! Commerce error types.

use thiserror::Error;

/// Errors raised at the edges of the storefront core.
///
/// The filter pipeline and the cart ledger themselves are total; these
/// variants cover lookups and parsing of user-supplied values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two catalog records share an identifier.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Category name did not match any known category.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Sort key did not match any known sort option.
    #[error("Unknown sort option: {0}")]
    UnknownSortOption(String),

    /// Price range rejected by front-end validation.
    #[error("Invalid price range: {min} > {max}")]
    InvalidPriceRange { min: u64, max: u64 },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
