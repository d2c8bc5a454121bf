//! Sort options and the filter/sort pipeline.

use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::search::{FilterResults, FilterState};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Sort options for the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Sort by price, low to high.
    #[default]
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by name, alphabetically.
    Name,
}

impl SortOption {
    /// All options in the order the sort selector lists them.
    pub const ALL: [SortOption; 3] = [
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::Name,
    ];

    /// Value emitted by the sort selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::Name => "name",
        }
    }

    /// Label shown in the sort selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "Цена: по возрастанию",
            SortOption::PriceDesc => "Цена: по убыванию",
            SortOption::Name => "По названию",
        }
    }

    /// Compare two products under this ordering.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::PriceAsc => a.price.amount.cmp(&b.price.amount),
            SortOption::PriceDesc => b.price.amount.cmp(&a.price.amount),
            SortOption::Name => compare_names(&a.name, &b.name),
        }
    }
}

impl FromStr for SortOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "price-asc" | "price_asc" => Ok(SortOption::PriceAsc),
            "price-desc" | "price_desc" => Ok(SortOption::PriceDesc),
            "name" => Ok(SortOption::Name),
            _ => Err(CommerceError::UnknownSortOption(s.to_string())),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alphabetical name ordering.
///
/// The primary comparison ignores case and files `ё` under `е`, as Russian
/// dictionaries do; names equal under that folding fall back to code-point
/// order so the result is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase).map(|c| match c {
        'ё' => 'е',
        other => other,
    })
}

/// Run the filter/sort pipeline over a catalog.
///
/// Keeps the products matching every predicate of `state`, then sorts them
/// stably by `state.sort`, so ties keep catalog order.
pub fn filter_products(catalog: &Catalog, state: &FilterState) -> FilterResults {
    let needle = state.search_needle();

    let mut items: Vec<Arc<Product>> = catalog
        .iter()
        .filter(|p| state.matches_with(p, needle.as_deref()))
        .cloned()
        .collect();

    items.sort_by(|a, b| state.sort.compare(a, b));

    FilterResults::new(items, state.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::money::Money;

    fn ids(results: &FilterResults) -> Vec<&str> {
        results.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_sort_option_strings() {
        for option in SortOption::ALL {
            assert_eq!(option.as_str().parse::<SortOption>().unwrap(), option);
        }
        assert!("relevance".parse::<SortOption>().is_err());
    }

    #[test]
    fn test_sort_option_serde() {
        assert_eq!(
            serde_json::to_string(&SortOption::PriceDesc).unwrap(),
            r#""price-desc""#
        );
    }

    #[test]
    fn test_compare_names_folds_case_and_yo() {
        assert_eq!(compare_names("Ёлка", "елка"), Ordering::Less);
        assert_eq!(compare_names("ёлка", "ель"), Ordering::Less);
        assert_eq!(compare_names("Брелок", "брелок б"), Ordering::Less);
        assert_eq!(compare_names("Худи", "Часы"), Ordering::Less);
        assert_eq!(compare_names("Шоппер", "Набор"), Ordering::Greater);
    }

    #[test]
    fn test_default_male_listing() {
        let results = filter_products(Catalog::global(), &FilterState::new());
        assert_eq!(ids(&results), vec!["m8", "m1", "m2", "m3", "m4", "m6", "m5", "m7"]);
    }

    #[test]
    fn test_price_desc_is_stable() {
        let state = FilterState::new().with_sort(SortOption::PriceDesc);
        let results = filter_products(Catalog::global(), &state);
        assert_eq!(ids(&results), vec!["m7", "m5", "m1", "m2", "m3", "m4", "m6", "m8"]);
    }

    #[test]
    fn test_name_sort_other_category() {
        let state = FilterState::new()
            .with_category(Category::Other)
            .with_sort(SortOption::Name);
        let results = filter_products(Catalog::global(), &state);
        assert_eq!(ids(&results), vec!["o3", "o2", "set2", "set1", "o1"]);
    }

    #[test]
    fn test_exclusive_female_under_budget() {
        let state = FilterState::new()
            .with_category(Category::Female)
            .with_exclusive_only(true)
            .with_price_range(crate::search::PriceRange::new(0, 50_000));
        let results = filter_products(Catalog::global(), &state);
        assert_eq!(ids(&results), vec!["w1"]);
        assert_eq!(results.items[0].price, Money::rub(15_000));
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let state = FilterState::new().with_search("несуществующий");
        let results = filter_products(Catalog::global(), &state);
        assert!(results.is_empty());
        assert_eq!(results.len(), 0);
    }
}
