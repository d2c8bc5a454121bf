//! Filter state and price ranges.

use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use crate::search::SortOption;
use serde::{Deserialize, Serialize};

/// Lowest price the price filter starts at.
pub const DEFAULT_MIN_PRICE: u64 = 0;
/// Highest price the price filter starts at.
pub const DEFAULT_MAX_PRICE: u64 = 100_000;
/// Granularity of the price slider.
pub const DEFAULT_PRICE_STEP: u64 = 1_000;

/// An inclusive price range in whole roubles.
///
/// A range whose lower bound exceeds its upper bound is allowed and simply
/// matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRange {
    /// Inclusive lower bound.
    pub min: u64,
    /// Inclusive upper bound.
    pub max: u64,
}

impl PriceRange {
    /// Create a range without validation.
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Create a range, rejecting `min > max`.
    pub fn checked(min: u64, max: u64) -> Result<Self, CommerceError> {
        if min > max {
            return Err(CommerceError::InvalidPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Check if a price lies within the range.
    pub fn contains(&self, price: u64) -> bool {
        self.min <= price && price <= self.max
    }

    /// Check if the range can match anything.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PRICE, DEFAULT_MAX_PRICE)
    }
}

/// The price slider's domain: bounds and step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBounds {
    /// Lowest selectable price.
    pub min: u64,
    /// Highest selectable price.
    pub max: u64,
    /// Slider step.
    pub step: u64,
}

impl PriceBounds {
    /// Validate the bounds.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.step == 0 {
            return Err(CommerceError::Config("slider step must be positive".into()));
        }
        if self.min > self.max {
            return Err(CommerceError::InvalidPriceRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// The full range the slider covers.
    pub fn full_range(&self) -> PriceRange {
        PriceRange::new(self.min, self.max)
    }

    /// Fit a typed range into the slider's domain.
    ///
    /// Reversed ends are swapped and each end is clamped to `[min, max]`.
    /// Values inside the domain pass through unrounded, so the range never
    /// admits a price the user excluded.
    pub fn clamp(&self, range: PriceRange) -> PriceRange {
        let (lo, hi) = if range.min <= range.max {
            (range.min, range.max)
        } else {
            (range.max, range.min)
        };
        PriceRange::new(self.clamp_value(lo), self.clamp_value(hi))
    }

    fn clamp_value(&self, value: u64) -> u64 {
        value.max(self.min).min(self.max)
    }
}

impl Default for PriceBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_PRICE,
            max: DEFAULT_MAX_PRICE,
            step: DEFAULT_PRICE_STEP,
        }
    }
}

/// The user's current filtering and sorting choices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterState {
    /// Selected category; exactly one is always selected.
    pub category: Category,
    /// Only show exclusive products.
    pub exclusive_only: bool,
    /// Inclusive price range.
    pub price_range: PriceRange,
    /// Free-text search over product names.
    pub search: String,
    /// Result ordering.
    pub sort: SortOption,
}

impl FilterState {
    /// Create the default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Set the exclusivity-only flag.
    pub fn with_exclusive_only(mut self, exclusive_only: bool) -> Self {
        self.exclusive_only = exclusive_only;
        self
    }

    /// Set the price range.
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Lowercased search needle, or `None` when search is inactive.
    pub(crate) fn search_needle(&self) -> Option<String> {
        if self.search.is_empty() {
            None
        } else {
            Some(self.search.to_lowercase())
        }
    }

    /// Check a product against every filter predicate.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_with(product, self.search_needle().as_deref())
    }

    pub(crate) fn matches_with(&self, product: &Product, needle: Option<&str>) -> bool {
        product.category == self.category
            && (!self.exclusive_only || product.exclusive)
            && self.price_range.contains(product.price.amount)
            && needle.map_or(true, |n| product.name_contains_lowercase(n))
    }
}
