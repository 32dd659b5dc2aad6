//! Category Order
//!
//! Priority order of categories. Index 0 is emitted first.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{BinsortError, Result};

/// Ordered set of unique category identifiers
///
/// Defines the complete domain of valid categories for one sort. Built once
/// and passed by reference into the binner.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CategoryOrder {
    categories: Vec<String>,
    positions: HashMap<String, usize>,
}

impl CategoryOrder {
    /// Build an order, rejecting duplicate identifiers
    pub fn new<I, S>(categories: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: Vec<String> = categories.into_iter().map(Into::into).collect();
        let mut positions = HashMap::with_capacity(categories.len());

        for (position, category) in categories.iter().enumerate() {
            if positions.insert(category.clone(), position).is_some() {
                return Err(BinsortError::DuplicateCategory {
                    category: category.clone(),
                });
            }
        }

        Ok(Self {
            categories,
            positions,
        })
    }

    /// Priority index of a category (0 = first in output)
    pub fn position(&self, category: &str) -> Option<usize> {
        self.positions.get(category).copied()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.positions.contains_key(category)
    }

    pub fn first(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    /// Categories in priority order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.categories.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl TryFrom<Vec<String>> for CategoryOrder {
    type Error = BinsortError;

    fn try_from(categories: Vec<String>) -> Result<Self> {
        Self::new(categories)
    }
}

impl From<CategoryOrder> for Vec<String> {
    fn from(order: CategoryOrder) -> Self {
        order.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_positions() {
        let order = CategoryOrder::new(["gum", "lollipop", "gummy"]).unwrap();
        assert_eq!(order.len(), 3);
        assert_eq!(order.position("gum"), Some(0));
        assert_eq!(order.position("gummy"), Some(2));
        assert_eq!(order.position("fitness"), None);
        assert!(order.contains("lollipop"));
        assert_eq!(
            order.iter().collect::<Vec<_>>(),
            vec!["gum", "lollipop", "gummy"]
        );
    }

    #[test]
    fn test_order_rejects_duplicates() {
        let err = CategoryOrder::new(["gum", "gummy", "gum"]).unwrap_err();
        match err {
            BinsortError::DuplicateCategory { category } => assert_eq!(category, "gum"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_order_is_valid() {
        let order = CategoryOrder::new(Vec::<String>::new()).unwrap();
        assert!(order.is_empty());
        assert_eq!(order.first(), None);
    }

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        order: CategoryOrder,
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Wrapper = toml::from_str(r#"order = ["a", "b"]"#).unwrap();
        assert_eq!(ok.order.position("b"), Some(1));

        let err = toml::from_str::<Wrapper>(r#"order = ["a", "a"]"#).unwrap_err();
        assert!(err.to_string().contains("Duplicate category"));
    }
}
