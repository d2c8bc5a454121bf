//! Filter results.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::search::FilterState;
use serde::Serialize;
use std::sync::Arc;

/// The ordered output of one pipeline run.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FilterResults {
    /// Matching products in display order.
    pub items: Vec<Arc<Product>>,
    /// The filter state that produced these items.
    pub state: FilterState,
}

impl FilterResults {
    /// Create results for a filter state.
    pub fn new(items: Vec<Arc<Product>>, state: FilterState) -> Self {
        Self { items, state }
    }

    /// Check if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of matching products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate matching products in order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Product>> {
        self.items.iter()
    }

    /// IDs of matching products in order.
    pub fn ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|p| p.id.clone()).collect()
    }

    /// Check if a product is among the results.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|p| &p.id == id)
    }
}

impl<'a> IntoIterator for &'a FilterResults {
    type Item = &'a Arc<Product>;
    type IntoIter = std::slice::Iter<'a, Arc<Product>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
