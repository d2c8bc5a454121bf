//! Storefront session: filter state, cart and catalog behind user actions.
//!
//! The presentation layer calls the setters and actions below and reads
//! [`Storefront::products`] and [`Storefront::cart_summary`] back. The
//! session never renders anything itself.

use crate::cart::{Cart, CartSummary};
use crate::catalog::{Catalog, Category, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::search::{filter_products, FilterResults, FilterState, PriceRange, SortOption};
use std::cell::RefCell;
use std::sync::Arc;

/// One user's storefront session.
#[derive(Debug)]
pub struct Storefront<'c> {
    catalog: &'c Catalog,
    defaults: FilterState,
    filters: FilterState,
    cart: Cart,
    memo: RefCell<Option<FilterResults>>,
}

impl Storefront<'static> {
    /// Open a session over the global seed catalog with default filters.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::global())
    }
}

impl Default for Storefront<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c> Storefront<'c> {
    /// Open a session over a specific catalog.
    pub fn with_catalog(catalog: &'c Catalog) -> Self {
        Self::with_defaults(catalog, FilterState::default())
    }

    /// Open a session whose filters start (and reset) at `defaults`.
    pub fn with_defaults(catalog: &'c Catalog, defaults: FilterState) -> Self {
        Self {
            catalog,
            filters: defaults.clone(),
            defaults,
            cart: Cart::new(),
            memo: RefCell::new(None),
        }
    }

    /// The catalog this session browses.
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Current filter state.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Select a category.
    pub fn set_category(&mut self, category: Category) {
        self.filters.category = category;
    }

    /// Toggle the exclusivity-only filter.
    pub fn set_exclusive_only(&mut self, exclusive_only: bool) {
        self.filters.exclusive_only = exclusive_only;
    }

    /// Set the inclusive price range.
    pub fn set_price_range(&mut self, range: PriceRange) {
        self.filters.price_range = range;
    }

    /// Set the free-text search.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filters.search = search.into();
    }

    /// Set the sort option.
    pub fn set_sort(&mut self, sort: SortOption) {
        self.filters.sort = sort;
    }

    /// Restore the filters this session started with.
    pub fn reset_filters(&mut self) {
        self.filters = self.defaults.clone();
    }

    /// The filtered, sorted product list for the current filters.
    ///
    /// The last result is memoized by the full filter state; a changed state
    /// always recomputes.
    pub fn products(&self) -> FilterResults {
        let mut memo = self.memo.borrow_mut();
        if let Some(cached) = memo.as_ref().filter(|r| r.state == self.filters) {
            tracing::trace!(count = cached.len(), "product list served from memo");
            return cached.clone();
        }

        let results = filter_products(self.catalog, &self.filters);
        tracing::trace!(
            count = results.len(),
            category = self.filters.category.as_str(),
            sort = self.filters.sort.as_str(),
            "product list recomputed"
        );
        *memo = Some(results.clone());
        results
    }

    /// Add one unit of a catalog product to the cart.
    ///
    /// Returns the line's new quantity, or an error for an unknown ID.
    pub fn add_to_cart(&mut self, id: &ProductId) -> Result<u32, CommerceError> {
        let product = Arc::clone(self.catalog.require(id)?);
        Ok(self.cart.add(product))
    }

    /// Add one unit of an already-resolved product to the cart.
    pub fn add_product(&mut self, product: Arc<Product>) -> u32 {
        self.cart.add(product)
    }

    /// Remove a product's whole line from the cart; no-op if absent.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> bool {
        self.cart.remove(id)
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Snapshot of the cart for display.
    pub fn cart_summary(&self) -> CartSummary {
        self.cart.summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_new_session_defaults() {
        let store = Storefront::new();
        assert_eq!(store.filters(), &FilterState::default());
        assert!(store.cart().is_empty());
        assert_eq!(store.products().len(), 8);
    }

    #[test]
    fn test_setters_drive_recompute() {
        let mut store = Storefront::new();
        store.set_category(Category::Other);
        assert_eq!(store.products().len(), 5);

        store.set_exclusive_only(true);
        assert_eq!(store.products().ids(), vec![ProductId::new("o3"), ProductId::new("set2")]);

        store.set_price_range(PriceRange::new(0, 10_000));
        assert_eq!(store.products().ids(), vec![ProductId::new("o3")]);

        store.set_sort(SortOption::Name);
        store.set_search("брелок");
        assert_eq!(store.products().ids(), vec![ProductId::new("o3")]);
    }

    #[test]
    fn test_memo_matches_fresh_run() {
        let mut store = Storefront::new();
        let first = store.products();
        let second = store.products();
        assert_eq!(first, second);

        store.set_sort(SortOption::PriceDesc);
        let resorted = store.products();
        assert_ne!(first.ids(), resorted.ids());
        assert_eq!(resorted, filter_products(Catalog::global(), store.filters()));
    }

    #[test]
    fn test_reset_filters() {
        let mut store = Storefront::new();
        store.set_category(Category::Female);
        store.set_search("часы");
        store.reset_filters();
        assert_eq!(store.filters(), &FilterState::default());
    }

    #[test]
    fn test_reset_returns_to_configured_defaults() {
        let defaults = FilterState::new().with_category(Category::Female);
        let mut store = Storefront::with_defaults(Catalog::global(), defaults.clone());
        store.set_category(Category::Other);
        store.reset_filters();
        assert_eq!(store.filters(), &defaults);
    }

    #[test]
    fn test_add_to_cart_by_id() {
        let mut store = Storefront::new();
        let id = ProductId::new("w2");
        assert_eq!(store.add_to_cart(&id).unwrap(), 1);
        assert_eq!(store.add_to_cart(&id).unwrap(), 2);
        assert_eq!(store.cart().total(), Money::rub(200_000));
    }

    #[test]
    fn test_add_unknown_id_fails_without_change() {
        let mut store = Storefront::new();
        let err = store.add_to_cart(&ProductId::new("zz")).unwrap_err();
        assert_eq!(err, CommerceError::ProductNotFound("zz".to_string()));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_cart_survives_filter_changes() {
        let mut store = Storefront::new();
        store.add_to_cart(&ProductId::new("m7")).unwrap();
        store.set_category(Category::Female);
        assert_eq!(store.cart_summary().line_count, 1);
        assert_eq!(store.cart_summary().total, Money::rub(100_000));
    }

    #[test]
    fn test_configured_session_totals_in_roubles() {
        let defaults = FilterState::new().with_category(Category::Other);
        let mut store = Storefront::with_defaults(Catalog::global(), defaults);
        store.add_to_cart(&ProductId::new("m7")).unwrap();

        let summary = store.cart_summary();
        assert_eq!(summary.total.display(), "100 000 \u{20bd}");
        assert_eq!(summary.lines[0].price_label(), "100 000 \u{20bd} \u{d7} 1");
    }
}
