//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use store_commerce::prelude::*;
use store_commerce::search::{DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE, DEFAULT_PRICE_STEP};

/// Config file names searched for, in order, from the working directory up.
pub const CONFIG_NAMES: [&str; 3] = ["store.toml", ".store.toml", "store.json"];

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Filters a new session starts with.
    #[serde(default)]
    pub filters: FilterDefaults,

    /// Display options.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Price slider domain.
    #[serde(default)]
    pub slider: SliderConfig,
}

impl StoreConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(&content, path.ends_with(".json"))
            .with_context(|| format!("Failed to parse config: {}", path))
    }

    /// Parse config text as JSON or TOML.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        let config = if json {
            serde_json::from_str(content)?
        } else {
            toml::from_str(content)?
        };
        Ok(config)
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Check every value, returning the first problem found.
    pub fn validate(&self) -> Result<()> {
        self.filter_state()?;
        self.price_bounds().validate()?;
        Ok(())
    }

    /// The filter state new sessions start with.
    pub fn filter_state(&self) -> Result<FilterState> {
        let f = &self.filters;
        let category: Category = f.category.parse()?;
        let sort: SortOption = f.sort.parse()?;
        let range = PriceRange::checked(f.min_price, f.max_price)?;

        Ok(FilterState::new()
            .with_category(category)
            .with_exclusive_only(f.exclusive_only)
            .with_price_range(range)
            .with_sort(sort))
    }

    /// Price slider domain.
    pub fn price_bounds(&self) -> PriceBounds {
        PriceBounds {
            min: self.slider.min,
            max: self.slider.max,
            step: self.slider.step,
        }
    }
}

/// Starting filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterDefaults {
    /// Category name (`male`, `female`, `other` or a display label).
    #[serde(default = "default_category")]
    pub category: String,

    /// Only show exclusive products.
    #[serde(default)]
    pub exclusive_only: bool,

    /// Lower price bound.
    #[serde(default)]
    pub min_price: u64,

    /// Upper price bound.
    #[serde(default = "default_max_price")]
    pub max_price: u64,

    /// Sort key (`price-asc`, `price-desc`, `name`).
    #[serde(default = "default_sort")]
    pub sort: String,
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            category: default_category(),
            exclusive_only: false,
            min_price: DEFAULT_MIN_PRICE,
            max_price: default_max_price(),
            sort: default_sort(),
        }
    }
}

fn default_category() -> String {
    Category::default().as_str().to_string()
}

fn default_max_price() -> u64 {
    DEFAULT_MAX_PRICE
}

fn default_sort() -> String {
    SortOption::default().as_str().to_string()
}

/// Display options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Print size labels under each product.
    #[serde(default = "default_true")]
    pub show_sizes: bool,

    /// Print color labels under each product.
    #[serde(default = "default_true")]
    pub show_colors: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_sizes: true,
            show_colors: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Price slider domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Lowest price the slider offers.
    #[serde(default)]
    pub min: u64,

    /// Highest price the slider offers.
    #[serde(default = "default_max_price")]
    pub max: u64,

    /// Slider granularity; must be positive.
    #[serde(default = "default_step")]
    pub step: u64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_PRICE,
            max: DEFAULT_MAX_PRICE,
            step: DEFAULT_PRICE_STEP,
        }
    }
}

fn default_step() -> u64 {
    DEFAULT_PRICE_STEP
}

/// Generate a default config file with comments.
pub fn generate_default_config() -> String {
    format!(
        r#"# Exclusive Store configuration

[filters]
# male | female | other
category = "{category}"
exclusive_only = false
min_price = {min}
max_price = {max}
# price-asc | price-desc | name
sort = "{sort}"

[display]
show_sizes = true
show_colors = true

[slider]
min = {min}
max = {max}
step = {step}
"#,
        category = default_category(),
        min = DEFAULT_MIN_PRICE,
        max = DEFAULT_MAX_PRICE,
        sort = default_sort(),
        step = DEFAULT_PRICE_STEP,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = StoreConfig::parse("", false).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.filter_state().unwrap(), FilterState::default());
    }

    #[test]
    fn test_generated_config_round_trips_to_defaults() {
        let config = StoreConfig::parse(&generate_default_config(), false).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = StoreConfig::parse(
            r#"
[filters]
category = "Женское"
sort = "name"
max_price = 50000
"#,
            false,
        )
        .unwrap();

        let state = config.filter_state().unwrap();
        assert_eq!(state.category, Category::Female);
        assert_eq!(state.sort, SortOption::Name);
        assert_eq!(state.price_range, PriceRange::new(0, 50_000));
    }

    #[test]
    fn test_json_config() {
        let config = StoreConfig::parse(r#"{"display": {"show_colors": false}}"#, true).unwrap();
        assert!(!config.display.show_colors);
        assert!(config.display.show_sizes);
    }

    #[test]
    fn test_validation_failures() {
        let mut config = StoreConfig::default();
        config.filters.sort = "relevance".into();
        assert!(config.validate().is_err());

        let mut config = StoreConfig::default();
        config.filters.min_price = 10;
        config.filters.max_price = 5;
        assert!(config.validate().is_err());

        let mut config = StoreConfig::default();
        config.slider.step = 0;
        assert!(config.validate().is_err());
    }
}
