//! Product catalog module.
//!
//! Contains the product and category types and the static seed catalog.

mod category;
mod product;
mod seed;

pub use category::Category;
pub use product::{Product, PLACEHOLDER_IMAGE};

use crate::error::CommerceError;
use crate::ids::ProductId;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

static SEED_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    let products = seed::seed_products();
    tracing::debug!(count = products.len(), "seed catalog built");
    Catalog::from_products(products).expect("seed catalog ids are unique")
});

/// An immutable, ordered set of products.
///
/// Products are held behind `Arc` so filter results and cart lines share
/// the catalog's records instead of copying them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// The process-wide seed catalog, built on first use.
    pub fn global() -> &'static Catalog {
        &SEED_CATALOG
    }

    /// Build a catalog from products, keeping their order.
    ///
    /// Returns an error if two products share an identifier.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut index = HashMap::with_capacity(products.len());
        let mut shared = Vec::with_capacity(products.len());

        for (position, product) in products.into_iter().enumerate() {
            if index.insert(product.id.clone(), position).is_some() {
                return Err(CommerceError::DuplicateProduct(product.id.into_inner()));
            }
            shared.push(Arc::new(product));
        }

        Ok(Self {
            products: shared,
            index,
        })
    }

    /// Look up a product by ID.
    pub fn get(&self, id: &ProductId) -> Option<&Arc<Product>> {
        self.index.get(id).map(|&i| &self.products[i])
    }

    /// Look up a product by ID, failing if it is unknown.
    pub fn require(&self, id: &ProductId) -> Result<&Arc<Product>, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Check if the catalog contains a product.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Product>> {
        self.products.iter()
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Products in a category, in catalog order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Arc<Product>> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_global_catalog_is_seeded_once() {
        let a = Catalog::global();
        let b = Catalog::global();
        assert_eq!(a.len(), 16);
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::global();
        let towel = catalog.get(&ProductId::new("m8")).unwrap();
        assert_eq!(towel.name, "Полотенце с логотипом");
        assert_eq!(towel.price, Money::rub(2000));
        assert!(catalog.get(&ProductId::new("nope")).is_none());
    }

    #[test]
    fn test_require_unknown_product() {
        let err = Catalog::global().require(&ProductId::new("x9")).unwrap_err();
        assert_eq!(err, CommerceError::ProductNotFound("x9".to_string()));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let products = vec![
            Product::new("a", "A", Money::rub(1), Category::Male),
            Product::new("a", "B", Money::rub(2), Category::Male),
        ];
        let err = Catalog::from_products(products).unwrap_err();
        assert_eq!(err, CommerceError::DuplicateProduct("a".to_string()));
    }

    #[test]
    fn test_in_category_keeps_order() {
        let ids: Vec<_> = Catalog::global()
            .in_category(Category::Female)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["w1", "w2", "w3"]);
    }
}
