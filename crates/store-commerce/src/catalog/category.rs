//! Product categories.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The storefront's fixed category enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Male,
    Female,
    Other,
}

impl Category {
    /// All categories in the order the category picker lists them.
    pub const ALL: [Category; 3] = [Category::Male, Category::Female, Category::Other];

    /// Machine name (e.g., "male").
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Male => "male",
            Category::Female => "female",
            Category::Other => "other",
        }
    }

    /// Label shown in the category picker and page heading.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Male => "Мужское",
            Category::Female => "Женское",
            Category::Other => "Другое",
        }
    }

    /// Parse a machine name or display label, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == needle || c.display_name().to_lowercase() == needle)
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::parse(s).ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_male() {
        assert_eq!(Category::default(), Category::Male);
    }

    #[test]
    fn test_parse_machine_and_display_names() {
        assert_eq!(Category::parse("female"), Some(Category::Female));
        assert_eq!(Category::parse("OTHER"), Some(Category::Other));
        assert_eq!(Category::parse("Мужское"), Some(Category::Male));
        assert_eq!(Category::parse("  женское "), Some(Category::Female));
        assert_eq!(Category::parse("kids"), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "kids".parse::<Category>().unwrap_err();
        assert_eq!(err, CommerceError::UnknownCategory("kids".to_string()));
    }

    #[test]
    fn test_serde_uses_machine_name() {
        assert_eq!(serde_json::to_string(&Category::Other).unwrap(), r#""other""#);
        let c: Category = serde_json::from_str(r#""female""#).unwrap();
        assert_eq!(c, Category::Female);
    }
}
