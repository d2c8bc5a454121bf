//! Product type.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Image used when a product has no photo of its own.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// A product in the catalog.
///
/// Products are created once when the catalog is seeded and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Price in whole roubles.
    pub price: Money,
    /// Category the product is listed under.
    pub category: Category,
    /// Limited/premium tier marker, independent of stock.
    pub exclusive: bool,
    /// Remaining units for limited runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limited: Option<NonZeroU32>,
    /// Image URI.
    pub image: String,
    /// Available size labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
    /// Available color labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
}

impl Product {
    /// Create a product with no limit, sizes or colors.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category,
            exclusive: false,
            limited: None,
            image: PLACEHOLDER_IMAGE.to_string(),
            sizes: None,
            colors: None,
        }
    }

    /// Mark the product as exclusive.
    pub fn exclusive(mut self) -> Self {
        self.exclusive = true;
        self
    }

    /// Set the limited-stock count. Zero means "not limited".
    pub fn with_limited(mut self, count: u32) -> Self {
        self.limited = NonZeroU32::new(count);
        self
    }

    /// Set the image URI.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the size labels.
    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = Some(sizes.into_iter().map(Into::into).collect());
        self
    }

    /// Set the color labels.
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    /// Check if the product is a limited run.
    pub fn is_limited(&self) -> bool {
        self.limited.is_some()
    }

    /// Check if the name contains `needle` ignoring case.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn name_contains_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_builder() {
        let p = Product::new("m6", "Футболка Лимитед", Money::rub(5000), Category::Male)
            .exclusive()
            .with_limited(50)
            .with_sizes(["S", "M"])
            .with_colors(["Черный"]);

        assert_eq!(p.id.as_str(), "m6");
        assert!(p.exclusive);
        assert!(p.is_limited());
        assert_eq!(p.limited.map(NonZeroU32::get), Some(50));
        assert_eq!(p.sizes.as_deref(), Some(&["S".to_string(), "M".to_string()][..]));
        assert_eq!(p.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_zero_limit_is_absent() {
        let p = Product::new("x", "X", Money::rub(1), Category::Other).with_limited(0);
        assert!(!p.is_limited());
    }

    #[test]
    fn test_name_contains_is_case_insensitive() {
        let p = Product::new("m1", "Футболка Классика", Money::rub(5000), Category::Male);
        assert!(p.name_contains_lowercase("футболка"));
        assert!(p.name_contains_lowercase("класс"));
        assert!(!p.name_contains_lowercase("худи"));
    }

    #[test]
    fn test_optional_fields_skipped_in_json() {
        let p = Product::new("o2", "Брелок Стандарт", Money::rub(500), Category::Other);
        let json = serde_json::to_value(&p).unwrap();
        assert!(json.get("limited").is_none());
        assert!(json.get("sizes").is_none());
        assert_eq!(json["category"], "other");
    }
}
