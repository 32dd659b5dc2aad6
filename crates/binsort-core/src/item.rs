//! Items to be binned
//!
//! The binner only needs to know which category an item belongs to, so it
//! works over anything implementing [`Categorized`]. [`Item`] is the
//! concrete category + name pair used by the CLI and the demo data.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BinsortError, Result};

/// Anything that can be placed into a category bucket.
pub trait Categorized {
    /// Category identifier used to pick the bucket.
    fn category(&self) -> &str;
}

/// A named item belonging to one category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub category: String,
    /// Opaque label, never inspected by the binner
    pub name: String,
}

impl Item {
    pub fn new(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
        }
    }
}

impl Categorized for Item {
    fn category(&self) -> &str {
        &self.category
    }
}

impl<T: Categorized + ?Sized> Categorized for &T {
    fn category(&self) -> &str {
        (**self).category()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.name)
    }
}

/// Item input file
///
/// ```toml
/// [[items]]
/// category = "gummy"
/// name = "Gummy bears"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemList {
    #[serde(default)]
    pub items: Vec<Item>,
}

impl ItemList {
    /// Load items from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BinsortError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| BinsortError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_display() {
        let item = Item::new("gummy", "Sour worms");
        assert_eq!(item.to_string(), "[gummy] Sour worms");
    }

    #[test]
    fn test_parse_item_list() {
        let list = ItemList::parse(
            r#"
[[items]]
category = "gum"
name = "Mint gum"

[[items]]
category = "lollipop"
name = "Strawberry lollipop"
"#,
        )
        .unwrap();

        assert_eq!(
            list.into_items(),
            vec![
                Item::new("gum", "Mint gum"),
                Item::new("lollipop", "Strawberry lollipop"),
            ]
        );
    }

    #[test]
    fn test_parse_empty_item_list() {
        let list = ItemList::parse("").unwrap();
        assert!(list.items.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = ItemList::load(&tmp.path().join("items.toml")).unwrap_err();
        assert!(matches!(err, BinsortError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("items.toml");
        fs::write(&path, "[[items]]\ncategory = 3\n").unwrap();

        let err = ItemList::load(&path).unwrap_err();
        assert!(matches!(err, BinsortError::ConfigParse { .. }));
    }
}
